use crate::{client::model::error::ApiError, model::brainstorm_session::BrainstormSessionSummaryDto};

use super::helper::{get, parse_response, send_request};

/// Get summaries of every session
pub async fn get_sessions() -> Result<Vec<BrainstormSessionSummaryDto>, ApiError> {
    let response = send_request(get("/api/sessions")).await?;
    parse_response(response).await
}

/// Get the summary of a single session
pub async fn get_session(id: i32) -> Result<BrainstormSessionSummaryDto, ApiError> {
    let url = format!("/api/session?id={}", id);

    let response = send_request(get(&url)).await?;
    parse_response(response).await
}
