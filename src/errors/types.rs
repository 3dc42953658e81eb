use thiserror::Error;

#[derive(Debug, Error)]
pub enum OstrichError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or missing request input.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Permission(String),

    #[error("{0}")]
    NotFound(String),

    /// Duplicate username or email.
    #[error("{0}")]
    Conflict(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Public, already-sanitised server failure message.
    #[error("{0}")]
    Internal(String),
}
