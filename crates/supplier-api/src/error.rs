//! API error type and its HTTP mapping

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use supplier_core::error::{DomainError, Operation};
use supplier_shared::constants::{
    MSG_CREATE_FAILED, MSG_DELETE_FAILED, MSG_INTERNAL_ERROR, MSG_SUPPLIER_NOT_FOUND,
    MSG_UPDATE_FAILED,
};

use crate::response::ValidationProblem;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::SupplierNotFound(_) => ApiError::NotFound(MSG_SUPPLIER_NOT_FOUND.to_string()),
            DomainError::PersistenceFailed(op) => ApiError::BadRequest(
                match op {
                    Operation::Create => MSG_CREATE_FAILED,
                    Operation::Update => MSG_UPDATE_FAILED,
                    Operation::Delete => MSG_DELETE_FAILED,
                }
                .to_string(),
            ),
            DomainError::Database(msg) => ApiError::InternalError(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Message bodies are bare JSON strings; validation failures use the problem body.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => {
                tracing::warn!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            },
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            },
            ApiError::Validation(errors) => {
                tracing::warn!("Validation failed: {}", errors);
                return ValidationProblem::from(&errors).into_response();
            },
            ApiError::InternalError(msg) => {
                // details stay in the log
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR.to_string())
            },
        };

        (status, Json(message)).into_response()
    }
}
