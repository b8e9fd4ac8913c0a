use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        brainstorm_session::BrainstormSessionDto,
        idea::{CreateIdeaDto, IdeaDto},
    },
    server::{
        error::AppError,
        model::idea::{CreateIdeaParam, Idea},
        service::idea::IdeaService,
        state::AppState,
    },
};

/// Tag for grouping idea endpoints in OpenAPI documentation
pub static IDEA_TAG: &str = "idea";

/// Get the ideas of a brainstorm session.
///
/// Returns the session's ideas in the order they were added. A session without ideas
/// yields an empty list.
///
/// # Returns
/// - `200 OK` - Ideas of the session
/// - `404 Not Found` - No session with the given ID; body is the ID
/// - `500 Internal Server Error` - Repository error
#[utoipa::path(
    get,
    path = "/api/ideas/forsession/{session_id}",
    tag = IDEA_TAG,
    params(
        ("session_id" = i32, Path, description = "Brainstorm session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved ideas", body = Vec<IdeaDto>),
        (status = 404, description = "Session not found", body = i32),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ideas_for_session(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ideas = list_ideas(&state, session_id).await?;

    Ok((StatusCode::OK, Json(ideas)))
}

/// Add an idea to a brainstorm session.
///
/// The idea's creation time is assigned by the server.
///
/// # Returns
/// - `200 OK` - The updated session including the new idea
/// - `400 Bad Request` - Malformed body or missing idea name
/// - `404 Not Found` - No session with the given ID; body is the ID
/// - `500 Internal Server Error` - Failed to store the idea
#[utoipa::path(
    post,
    path = "/api/ideas/create",
    tag = IDEA_TAG,
    request_body = CreateIdeaDto,
    responses(
        (status = 200, description = "Successfully added idea", body = BrainstormSessionDto),
        (status = 400, description = "Invalid idea data", body = ValidationErrorDto),
        (status = 404, description = "Session not found", body = i32),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_idea(
    State(state): State<AppState>,
    payload: Result<Json<CreateIdeaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let session = add_idea(&state, payload).await?;

    Ok((StatusCode::OK, Json(session)))
}

/// Get the ideas of a brainstorm session.
///
/// Behaves exactly like `GET /api/ideas/forsession/{session_id}`.
#[utoipa::path(
    get,
    path = "/api/ideas/forsessionactionresult/{session_id}",
    tag = IDEA_TAG,
    params(
        ("session_id" = i32, Path, description = "Brainstorm session ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved ideas", body = Vec<IdeaDto>),
        (status = 404, description = "Session not found", body = i32),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ideas_for_session_action_result(
    State(state): State<AppState>,
    Path(session_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let ideas = list_ideas(&state, session_id).await?;

    Ok((StatusCode::OK, Json(ideas)))
}

/// Add an idea to a brainstorm session, answering with the created resource.
///
/// Same validation and error handling as `POST /api/ideas/create`, but a successful
/// request responds with `201 Created` and a `Location` header pointing at the
/// session detail endpoint.
///
/// # Returns
/// - `201 Created` - The updated session including the new idea
/// - `400 Bad Request` - Malformed body or missing idea name
/// - `404 Not Found` - No session with the given ID; body is the ID
/// - `500 Internal Server Error` - Failed to store the idea
#[utoipa::path(
    post,
    path = "/api/ideas/createactionresult",
    tag = IDEA_TAG,
    request_body = CreateIdeaDto,
    responses(
        (status = 201, description = "Successfully added idea", body = BrainstormSessionDto,
            headers(("Location" = String, description = "URL of the session detail"))),
        (status = 400, description = "Invalid idea data", body = ValidationErrorDto),
        (status = 404, description = "Session not found", body = i32),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_idea_action_result(
    State(state): State<AppState>,
    payload: Result<Json<CreateIdeaDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let session = add_idea(&state, payload).await?;
    let location = format!("/api/session?id={}", session.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(session),
    ))
}

async fn list_ideas(state: &AppState, session_id: i32) -> Result<Vec<IdeaDto>, AppError> {
    let service = IdeaService::new(state.sessions.as_ref());

    let ideas = service.list_for_session(session_id).await?;

    Ok(ideas.into_iter().map(Idea::into_dto).collect())
}

async fn add_idea(
    state: &AppState,
    payload: Result<Json<CreateIdeaDto>, JsonRejection>,
) -> Result<BrainstormSessionDto, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected malformed idea request body");
        AppError::BadRequest(rejection.body_text())
    })?;

    let service = IdeaService::new(state.sessions.as_ref());

    let session = service.create(CreateIdeaParam::from(payload)).await?;

    Ok(session.into_dto())
}
