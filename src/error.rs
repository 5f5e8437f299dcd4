//! Crate error types.
//!
//! Negotiation outcomes have their own type, [`NegotiationError`], because
//! a failed negotiation is an answer to send rather than a fault. Everything
//! around the core (configuration, dictionary files, CLI input) reports
//! through [`DiamError`].

use thiserror::Error;

use crate::negotiation::NegotiationError;

/// Diameter crate errors.
#[derive(Error, Debug)]
pub enum DiamError {
    /// Configuration error.
    #[error("Config error: {0}")]
    Config(String),

    /// Dictionary could not be read or is inconsistent.
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Input could not be interpreted as capabilities-exchange AVPs.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Application negotiation failed.
    #[error("Negotiation failed: {0}")]
    Negotiation(#[from] NegotiationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, DiamError>;

impl From<toml::de::Error> for DiamError {
    fn from(err: toml::de::Error) -> Self {
        DiamError::Config(err.to_string())
    }
}
