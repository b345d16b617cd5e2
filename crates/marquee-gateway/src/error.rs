use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::{CatalogError, ValidationError};
use tracing::error;

use crate::model::{MessageResponse, ValidationErrorResponse};

pub type Result<T> = std::result::Result<T, AppError>;

/// Body of a 404 on `GET /movies/{id}`.
pub const GET_NOT_FOUND: &str = "404 movie not found";
/// Body of a 404 on update and delete.
pub const MOVIE_NOT_FOUND: &str = "Movie not found";
pub const ORIGIN_REJECTED: &str = "Not allowed by CORS";

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Rejected(StatusCode, String),
    NotFound(&'static str),
    OriginRejected,
    Internal(String),
}

impl AppError {
    /// Converts a catalog error, using `not_found` as the 404 message.
    pub fn from_catalog(error: CatalogError, not_found: &'static str) -> Self {
        match error {
            CatalogError::Validation(error) => Self::Validation(error),
            CatalogError::NotFound(_) => Self::NotFound(not_found),
            CatalogError::Storage(message) => Self::Internal(message),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(error: CatalogError) -> Self {
        Self::from_catalog(error, MOVIE_NOT_FOUND)
    }
}

/// Any unreadable body (bad JSON, wrong shape, missing content type) is a 400.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(error) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorResponse::from(error)),
            )
                .into_response(),
            AppError::Rejected(status, message) => {
                (status, Json(MessageResponse::new(message))).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(MessageResponse::new(message))).into_response()
            }
            AppError::OriginRejected => (
                StatusCode::FORBIDDEN,
                Json(MessageResponse::new(ORIGIN_REJECTED)),
            )
                .into_response(),
            AppError::Internal(message) => {
                error!(error = %message, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("internal server error")),
                )
                    .into_response()
            }
        }
    }
}
