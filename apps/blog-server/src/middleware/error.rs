//! Error translation - every failure leaves the service as an
//! [`ErrorResponse`] body with a matching status code.

use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{JsonPayloadError, PathError},
    http::StatusCode,
};
use blog_core::error::DomainError;
use blog_shared::ErrorResponse;
use std::fmt;

/// Application-level error kinds.
#[derive(Debug)]
pub enum AppError {
    /// Client sent something unusable: bad body, bad id, unsupported method.
    Validation(Vec<String>),
    NotFound(String),
    /// Detail is logged, never returned.
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(vec![msg.into()])
    }

    /// Name reported in the `exception` field of the error body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Validation",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "Internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to hand back to the client.
    fn public_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors.join(", "),
            AppError::NotFound(msg) => msg.clone(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {}", errors.join(", ")),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Validation(errors) => AppError::Validation(errors),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// An [`AppError`] bound to the path of the request that produced it.
#[derive(Debug)]
pub struct ApiError {
    error: AppError,
    path: String,
}

impl ApiError {
    pub fn new(error: impl Into<AppError>, path: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.path)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match &self.error {
            AppError::Internal(detail) => {
                tracing::error!(path = %self.path, "Internal error: {}", detail);
            }
            other => {
                tracing::warn!(path = %self.path, status = status.as_u16(), "{}", other);
            }
        }

        let body = ErrorResponse::new(
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            self.error.kind(),
            self.error.public_message(),
            self.path.clone(),
        );

        HttpResponse::build(status).json(body)
    }
}

/// Attach the request path to an error on its way out of a handler.
pub trait ResultExt<T> {
    fn at(self, req: &HttpRequest) -> Result<T, ApiError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn at(self, req: &HttpRequest) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(e, req.path()))
    }
}

/// `web::Json` failures: missing/malformed body or wrong content type.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    ApiError::new(AppError::validation(err.to_string()), req.path()).into()
}

/// `web::Path` failures: an id that is not an integer.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    ApiError::new(AppError::validation(err.to_string()), req.path()).into()
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
