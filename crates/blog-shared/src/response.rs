//! Uniform error body returned with every 4xx/5xx response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// When the error was produced, in epoch milliseconds.
    pub timestamp: i64,

    /// The HTTP status code.
    pub status: u16,

    /// Reason phrase of the status code.
    pub error: String,

    /// Name of the error kind (`Validation`, `NotFound`, `Internal`).
    pub exception: String,

    /// A human-readable explanation specific to this occurrence.
    pub message: String,

    /// Path of the request that failed.
    pub path: String,
}

impl ErrorResponse {
    pub fn new(
        status: u16,
        error: impl Into<String>,
        exception: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp_millis(),
            status,
            error: error.into(),
            exception: exception.into(),
            message: message.into(),
            path: path.into(),
        }
    }
}
