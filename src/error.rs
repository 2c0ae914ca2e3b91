#[derive(Debug, thiserror::Error)]
pub enum CardSearchError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Upstream API provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CardSearchError {
    /// HTTP status of an upstream failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CardSearchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CardSearchError>;
