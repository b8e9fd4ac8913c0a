use axum::{
    extract::{rejection::FormRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use dioxus_logger::tracing;
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        brainstorm_session::{BrainstormSessionSummaryDto, CreateBrainstormSessionDto},
    },
    server::{
        error::AppError, model::brainstorm_session::CreateBrainstormSessionParam,
        service::brainstorm_session::BrainstormSessionService, state::AppState,
    },
};

/// Tag for grouping session endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "session";

/// Body of the session detail response when the session doesn't exist.
pub static SESSION_NOT_FOUND_MESSAGE: &str = "Session not found.";

/// Query parameters for the session detail endpoint.
///
/// The ID is read as text so that a missing, empty, or non-numeric value all lead
/// to the same redirect instead of a query rejection.
#[derive(Deserialize)]
pub struct SessionDetailParams {
    pub id: Option<String>,
}

impl SessionDetailParams {
    fn session_id(&self) -> Option<i32> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}

/// Get summaries of every brainstorm session.
///
/// # Returns
/// - `200 OK` - Session summaries ordered by ID
/// - `500 Internal Server Error` - Repository error
#[utoipa::path(
    get,
    path = "/api/sessions",
    tag = SESSION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved sessions", body = Vec<BrainstormSessionSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sessions(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BrainstormSessionService::new(state.sessions.as_ref());

    let sessions = service.list().await?;

    let summaries: Vec<BrainstormSessionSummaryDto> = sessions
        .iter()
        .map(|session| session.to_summary_dto())
        .collect();

    Ok((StatusCode::OK, Json(summaries)))
}

/// Create a new brainstorm session from the home page form.
///
/// Accepts a URL-encoded form with a `sessionName` field and redirects back to the
/// home page once the session is stored.
///
/// # Returns
/// - `303 See Other` - Session created, redirect to `/`
/// - `400 Bad Request` - Malformed form or missing session name
/// - `500 Internal Server Error` - Failed to store the session
#[utoipa::path(
    post,
    path = "/api/sessions",
    tag = SESSION_TAG,
    request_body(
        content = CreateBrainstormSessionDto,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Session created, redirecting to the home page"),
        (status = 400, description = "Invalid session data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
    payload: Result<Form<CreateBrainstormSessionDto>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed session form");
        AppError::BadRequest(rejection.body_text())
    })?;

    let service = BrainstormSessionService::new(state.sessions.as_ref());

    service
        .create(CreateBrainstormSessionParam::from(payload))
        .await?;

    Ok(Redirect::to("/"))
}

/// Get the summary of a single brainstorm session.
///
/// # Returns
/// - `200 OK` - Session summary
/// - `303 See Other` - No usable `id` was given, redirect to `/`
/// - `404 Not Found` - Plain text `Session not found.`
/// - `500 Internal Server Error` - Repository error
#[utoipa::path(
    get,
    path = "/api/session",
    tag = SESSION_TAG,
    params(
        ("id" = Option<i32>, Query, description = "Brainstorm session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved session", body = BrainstormSessionSummaryDto),
        (status = 303, description = "No session ID given, redirecting to the home page"),
        (status = 404, description = "Session not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_detail(
    State(state): State<AppState>,
    Query(params): Query<SessionDetailParams>,
) -> Result<Response, AppError> {
    let Some(id) = params.session_id() else {
        tracing::warn!(
            id = params.id.as_deref().unwrap_or_default(),
            "Session ID was not provided or is not a number, redirecting to the home page"
        );
        return Ok(Redirect::to("/").into_response());
    };

    let service = BrainstormSessionService::new(state.sessions.as_ref());

    match service.get_detail(id).await? {
        Some(session) => Ok((StatusCode::OK, Json(session.to_summary_dto())).into_response()),
        None => Ok((StatusCode::NOT_FOUND, SESSION_NOT_FOUND_MESSAGE).into_response()),
    }
}
