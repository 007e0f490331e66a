use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::clients::ProviderError;
use crate::services::LocationError;

/// Body of every failed response; the cause is only logged.
pub const FAILURE_MESSAGE: &str = "sorry, something broke.";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),

    ExternalApiError { service: String, message: String },

    ValidationError(String),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::ExternalApiError { service, message } => {
                write!(f, "{service} error: {message}")
            }
            Self::ValidationError(msg) => write!(f, "Validation error: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::DatabaseError(_) => "store",
            Self::ExternalApiError { .. } => "provider",
            Self::ValidationError(_) => "validation",
            Self::InternalError(_) => "internal",
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::DatabaseError(msg) => tracing::error!("Database error: {}", msg),
            Self::InternalError(msg) => tracing::error!("Internal error: {}", msg),
            Self::ExternalApiError { service, message } => {
                tracing::warn!("{} API error: {}", service, message);
                metrics::counter!("provider_errors_total", "provider" => service.clone())
                    .increment(1);
            }
            Self::ValidationError(msg) => tracing::debug!("Rejected request: {}", msg),
            Self::NotFound(msg) => tracing::debug!("Not found: {}", msg),
        }

        metrics::counter!("api_errors_total", "kind" => self.kind()).increment(1);

        // Every failure kind shares the same status and body on the wire.
        (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE).into_response()
    }
}

impl From<ProviderError> for ApiError {
    fn from(err: ProviderError) -> Self {
        Self::ExternalApiError {
            service: err.provider().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<LocationError> for ApiError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Store(msg) => Self::DatabaseError(msg),
            LocationError::Provider(e) => e.into(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}
