use dioxus_logger::tracing::Level;

use crate::server::{
    data::{memory::InMemorySessionRepository, SessionRepository},
    error::AppError,
    logging::capture::CaptureLayer,
    model::{brainstorm_session::CreateBrainstormSessionParam, idea::CreateIdeaParam},
    service::{brainstorm_session::BrainstormSessionService, idea::IdeaService},
};


fn idea_param(session_id: i32, name: &str, description: &str) -> CreateIdeaParam {
    CreateIdeaParam {
        session_id,
        name: name.to_string(),
        description: description.to_string(),
    }
}
