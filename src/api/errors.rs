use thiserror::Error;

/// Errors at the dealership backend API seam.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("backend not configured: {0}\n   → Set INSPECTION_DESK_BACKEND_URL or add [backend] to inspection-desk.toml")]
    ConfigMissing(String),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned HTTP {status} for {url}: {message}")]
    Status {
        url: String,
        status: u16,
        message: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Server-provided message when one exists, for user-facing alerts.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}
