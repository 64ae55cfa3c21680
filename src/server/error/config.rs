use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` must be defined before the server can
    /// start; see `.env.example` for the full list of configuration
    /// variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
