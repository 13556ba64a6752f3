//! API error types with structured JSON responses.
//!
//! Body shapes follow the frontend contract: every error carries an
//! `error` string; validation failures add a `fields` array for inline
//! display; internal failures add a generic `message` and never leak
//! details to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::catalog::CatalogError;
use crate::validator::ValidationErrors;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldErrorBody>>,
}

/// One failing form field, for inline error rendering.
#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    pub param: String,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required fields: disease and patientName")]
    MissingRequiredFields,
    #[error("Unknown disease: {0}")]
    UnknownDisease(String),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Rate limit exceeded")]
    RateLimited { retry_after: u64 },
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingRequiredFields => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Missing required fields: disease and patientName".to_string(),
                    message: None,
                    fields: None,
                },
            ),
            ApiError::UnknownDisease(id) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: format!("Unknown disease: {id}"),
                    message: None,
                    fields: None,
                },
            ),
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: errors.to_string(),
                    message: None,
                    fields: Some(
                        errors
                            .0
                            .iter()
                            .map(|e| FieldErrorBody {
                                param: e.param.clone(),
                                message: e.to_string(),
                            })
                            .collect(),
                    ),
                },
            ),
            ApiError::NotFound(detail) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: detail.clone(),
                    message: None,
                    fields: None,
                },
            ),
            ApiError::RateLimited { .. } => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorBody {
                    error: "Too many requests from this IP, please try again later.".to_string(),
                    message: None,
                    fields: None,
                },
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "Internal server error".to_string(),
                        message: Some("Something went wrong".to_string()),
                        fields: None,
                    },
                )
            }
        };

        let mut response = (status, Json(body)).into_response();
        // Add retry-after header for rate limited responses
        if let ApiError::RateLimited { retry_after } = &self {
            if let Ok(val) = axum::http::HeaderValue::from_str(&retry_after.to_string()) {
                response.headers_mut().insert("Retry-After", val);
            }
        }
        response
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownDisease(id) => ApiError::UnknownDisease(id),
        }
    }
}
