//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type
//! returned by services and controllers; every handler is the final boundary for it,
//! so each variant maps to exactly one terminal response:
//!
//! - `Validation` / `BadRequest` → 400 Bad Request
//! - `SessionNotFound` → 404 Not Found carrying the requested session ID
//! - `Persistence` and all infrastructure errors → 500 Internal Server Error with a
//!   generic message; details only reach the log

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::{error::config::ConfigError, model::validation::FieldErrors},
};

/// Message returned to clients for every 500 response.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request.";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error that has not been logged yet.
    ///
    /// Results in 500 Internal Server Error with the error logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Request body passed parsing but one or more fields are invalid.
    ///
    /// Results in 400 Bad Request with the field-level messages.
    #[error("Invalid request: {0}")]
    Validation(FieldErrors),

    /// Request body or query could not be parsed at all.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// The referenced brainstorm session does not exist.
    ///
    /// Results in 404 Not Found whose body is the bare session ID.
    #[error("Brainstorm session with ID {0} not found")]
    SessionNotFound(i32),

    /// The repository failed to store or load data.
    ///
    /// The service layer logs these with operation context before returning them, so the
    /// response mapping does not log again. Results in 500 Internal Server Error.
    #[error("Repository operation failed: {0}")]
    Persistence(#[source] sea_orm::DbErr),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

/// Converts application errors into HTTP responses.
///
/// Internal errors are logged with full details but return a generic message to avoid
/// leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "One or more validation errors occurred.".to_string(),
                    fields: errors.into_inner(),
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::SessionNotFound(session_id) => {
                (StatusCode::NOT_FOUND, Json(session_id)).into_response()
            }
            Self::Persistence(_) => generic_error_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                generic_error_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn generic_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            error: GENERIC_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns the generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Unhandled error while processing request");

        generic_error_response()
    }
}
