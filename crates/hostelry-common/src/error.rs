use thiserror::Error;

/// Core error type for Hostelry operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    #[error("Unknown role: {0}")]
    UnknownRole(String),

    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    #[error("Invalid {entity} transition: cannot {action} from {from}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        action: String,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not permitted: {0}")]
    Forbidden(String),
}

impl Error {
    /// Human-readable reason supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
