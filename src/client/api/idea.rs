use crate::{
    client::model::error::ApiError,
    model::{
        brainstorm_session::BrainstormSessionDto,
        idea::{CreateIdeaDto, IdeaDto},
    },
};

use super::helper::{get, parse_response, post, send_request, serialize_json};

/// Get the ideas of a session in the order they were added
pub async fn get_ideas_for_session(session_id: i32) -> Result<Vec<IdeaDto>, ApiError> {
    let url = format!("/api/ideas/forsession/{}", session_id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Add an idea to a session, returning the updated session
pub async fn create_idea(
    session_id: i32,
    name: String,
    description: String,
) -> Result<BrainstormSessionDto, ApiError> {
    let payload = CreateIdeaDto {
        session_id,
        name,
        description,
    };
    let body = serialize_json(&payload)?;

    let response = send_request(post("/api/ideas/create").body(body)).await?;
    parse_response(response).await
}
