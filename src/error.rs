use thiserror::Error;

/// Error types for the city-weather application
#[derive(Error, Debug)]
pub enum AppError {
    /// The weather provider answered with a non-success status.
    ///
    /// Displays only the provider's message (e.g. "city not found") so it can be
    /// shown to the user as-is.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// Error when environment variable is not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// A provider payload decoded fine but lacks an element we rely on
    #[error("Incomplete API response: missing {0}")]
    MissingField(String),

    /// Wrapper for reqwest errors
    #[error("HTTP request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Wrapper for JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// `true` for errors reported by the provider itself, `false` for anything
    /// else (transport failures, malformed payloads, configuration).
    pub fn is_provider(&self) -> bool {
        matches!(self, AppError::Provider { .. })
    }
}
