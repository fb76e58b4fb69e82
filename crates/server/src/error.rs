//! Unified error handling with Sentry integration.
//!
//! Provides an `AppError` type that captures server-side failures to Sentry
//! before responding to the client. Route handlers return `Result<T, AppError>`
//! and every error body is JSON: `{"error": "<message>"}`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::OrderError;

/// Application-level error type for the order service.
#[derive(Debug, Error)]
pub enum AppError {
    /// An order was rejected by the validation pipeline.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request body could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Order(err) => match err {
                OrderError::IncompleteCustomer
                | OrderError::UnsupportedCountry(_)
                | OrderError::IncompleteAddress => StatusCode::BAD_REQUEST,
                OrderError::ProductNotFound(_) | OrderError::AddressNotFound => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                OrderError::AddressLookup(_) => StatusCode::BAD_GATEWAY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Order(OrderError::AddressLookup(_)))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if self.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Order(OrderError::AddressLookup(_)) => "address service unavailable".to_string(),
            _ => self.to_string(),
        };

        (self.status(), Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use order_gate_core::ProductId;

    use super::*;
    use crate::geocoder::GeocoderError;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product PIPR-0".to_string());
        assert_eq!(err.to_string(), "Not found: product PIPR-0");

        // Pipeline messages pass through untouched
        let err = AppError::from(OrderError::ProductNotFound(ProductId::new("UNKNOWN")));
        assert_eq!(err.to_string(), "product (UNKNOWN) not found");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            let response = err.into_response();
            response.status()
        }

        assert_eq!(
            get_status(OrderError::IncompleteCustomer.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(OrderError::UnsupportedCountry("Espagne".to_string()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(OrderError::IncompleteAddress.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(OrderError::ProductNotFound(ProductId::new("X")).into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(OrderError::AddressNotFound.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(OrderError::AddressLookup(GeocoderError::Status(503)).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
    }
}
