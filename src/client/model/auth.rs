use std::sync::{Arc, RwLock};

/// Shared holder for the bearer token of the signed-in account.
///
/// The API client reads it on every request; the shell persists it across
/// launches and writes it back here on startup. Clearing the token logs the
/// client out.
#[derive(Clone, Default)]
pub struct TokenStore {
    token: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: impl Into<String>) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(token.into());
    }

    pub fn clear(&self) {
        let mut guard = match self.token.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = None;
    }

    pub fn get(&self) -> Option<String> {
        let guard = match self.token.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_round_trip() {
        let store = TokenStore::new();
        assert_eq!(store.get(), None);

        store.set("abc.def.ghi");
        assert_eq!(store.get(), Some("abc.def.ghi".to_string()));

        store.clear();
        assert_eq!(store.get(), None);
    }
}
