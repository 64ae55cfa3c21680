/// Error surfaced by every API call: the HTTP status (0 when the request
/// never reached the server) and the server's message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl ApiError {
    /// User-facing message for the given status.
    ///
    /// The UI shows these instead of raw server messages; anything
    /// unexpected falls back to a generic message.
    pub fn user_message(&self) -> &'static str {
        match self.status {
            400 => "Requête invalide, vérifiez les champs saisis.",
            401 => "Session expirée, veuillez vous reconnecter.",
            403 => "Accès refusé.",
            404 => "Ressource introuvable.",
            409 => "Cette adresse e-mail est déjà utilisée.",
            429 => "Trop de requêtes, réessayez dans un instant.",
            500..=599 => "Erreur serveur, réessayez plus tard.",
            _ => "Une erreur est survenue, veuillez réessayer.",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API error {}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_auth_statuses_to_french_messages() {
        let unauthorized = ApiError {
            status: 401,
            message: "Invalid or expired token".to_string(),
        };
        assert_eq!(
            unauthorized.user_message(),
            "Session expirée, veuillez vous reconnecter."
        );

        let conflict = ApiError {
            status: 409,
            message: "Email already used".to_string(),
        };
        assert_eq!(
            conflict.user_message(),
            "Cette adresse e-mail est déjà utilisée."
        );
    }

    #[test]
    fn unknown_status_gets_generic_fallback() {
        let teapot = ApiError {
            status: 418,
            message: "teapot".to_string(),
        };
        assert_eq!(
            teapot.user_message(),
            "Une erreur est survenue, veuillez réessayer."
        );
    }
}
