use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct IdeaDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
}

/// Request body for adding an idea to a session.
///
/// `name` and `description` default to empty so that a missing name is reported as a
/// field error rather than a body parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaDto {
    pub session_id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}
