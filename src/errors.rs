use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {status} for {url}")]
    Api { status: u16, url: String },

    #[error("Upload failed: {reason}")]
    UploadFailed { reason: String },

    #[error("Telegram API rejected the request: {description}")]
    Telegram { description: String },

    #[error("Malformed API response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Custom result type
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn api(status: u16, url: &str) -> Self {
        Self::Api {
            status,
            url: url.to_string(),
        }
    }

    pub fn upload_failed(reason: impl Into<String>) -> Self {
        Self::UploadFailed {
            reason: reason.into(),
        }
    }

    /// Whether the uploader loop may recover from this error with a cooldown
    /// and a fresh scan. Only transport-level failures qualify; everything
    /// else (bad token, bad chat id, unreadable file) terminates the process.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::UploadFailed { .. })
    }
}
