use std::sync::Arc;

use axum::{
    body::Body,
    extract::{FromRequest, Path, Query, State},
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use dioxus_logger::tracing::Level;
use serde::de::DeserializeOwned;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        brainstorm_session::{
            BrainstormSessionDto, BrainstormSessionSummaryDto, CreateBrainstormSessionDto,
        },
        idea::{CreateIdeaDto, IdeaDto},
    },
    server::{
        data::{memory::InMemorySessionRepository, SessionRepository},
        error::GENERIC_ERROR_MESSAGE,
        logging::capture::CaptureLayer,
        state::AppState,
    },
};


/// Creates application state backed by a fresh in-memory repository.
///
/// The repository handle is returned as well so tests can seed data and inspect writes.
fn setup() -> (Arc<InMemorySessionRepository>, State<AppState>) {
    let repo = Arc::new(InMemorySessionRepository::new());
    let state = AppState::new(repo.clone());

    (repo, State(state))
}

async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

fn header_value(response: &Response, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn create_idea_body(session_id: i32, name: &str, description: &str) -> CreateIdeaDto {
    CreateIdeaDto {
        session_id,
        name: name.to_string(),
        description: description.to_string(),
    }
}
