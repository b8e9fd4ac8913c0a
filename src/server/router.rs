use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        brainstorm_session::{
            BrainstormSessionDto, BrainstormSessionSummaryDto, CreateBrainstormSessionDto,
        },
        idea::{CreateIdeaDto, IdeaDto},
    },
    server::{
        controller::{
            brainstorm_session::{self, SESSION_TAG},
            idea::{self, IDEA_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Brainstorm Sessions API"),
    paths(
        idea::get_ideas_for_session,
        idea::create_idea,
        idea::get_ideas_for_session_action_result,
        idea::create_idea_action_result,
        brainstorm_session::get_sessions,
        brainstorm_session::create_session,
        brainstorm_session::get_session_detail,
    ),
    components(schemas(
        IdeaDto,
        CreateIdeaDto,
        BrainstormSessionDto,
        BrainstormSessionSummaryDto,
        CreateBrainstormSessionDto,
        ErrorDto,
        ValidationErrorDto,
    )),
    tags(
        (name = IDEA_TAG, description = "Ideas within a brainstorm session"),
        (name = SESSION_TAG, description = "Brainstorm sessions"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ideas/forsession/{session_id}", get(idea::get_ideas_for_session))
        .route("/api/ideas/create", post(idea::create_idea))
        .route(
            "/api/ideas/forsessionactionresult/{session_id}",
            get(idea::get_ideas_for_session_action_result),
        )
        .route(
            "/api/ideas/createactionresult",
            post(idea::create_idea_action_result),
        )
        .route(
            "/api/sessions",
            get(brainstorm_session::get_sessions).post(brainstorm_session::create_session),
        )
        .route("/api/session", get(brainstorm_session::get_session_detail))
}

/// Swagger UI at `/api/docs` backed by the generated OpenAPI document.
pub fn docs() -> SwaggerUi {
    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi())
}
