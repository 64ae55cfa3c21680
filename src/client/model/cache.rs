use crate::client::model::error::ApiError;

/// Fetch state a view-model holds for one remote collection.
#[derive(Clone, Default)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_fetched(&self) -> bool {
        !matches!(self, Cache::NotFetched)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Cache::Fetched(_))
    }

    /// Map the inner data to another value, returning None if not fetched successfully
    pub fn map<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.data().map(f)
    }

    /// Flat-map the inner data, useful for chaining Options
    pub fn and_then<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> Option<U>,
    {
        self.data().and_then(f)
    }
}

/// Fetch state keyed by the pet it was loaded for.
///
/// The pet-detail screen reuses one view-model across pets; keeping the pet
/// id inside the state prevents showing one pet's health events under
/// another after a quick navigation.
#[derive(Clone, Default)]
pub enum PetCache<T> {
    #[default]
    NotFetched,
    Loading {
        pet_id: i32,
    },
    Fetched {
        pet_id: i32,
        data: T,
    },
    Error {
        pet_id: i32,
        error: ApiError,
    },
}

impl<T> PetCache<T> {
    pub fn pet_id(&self) -> Option<i32> {
        match self {
            PetCache::Loading { pet_id } | PetCache::Fetched { pet_id, .. } => Some(*pet_id),
            PetCache::Error { pet_id, .. } => Some(*pet_id),
            PetCache::NotFetched => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            PetCache::Fetched { data, .. } => Some(data),
            _ => None,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, PetCache::Fetched { .. })
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PetCache::Loading { .. })
    }
}
