use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::idea::IdeaDto;

/// A session with its full, ordered idea list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BrainstormSessionDto {
    pub id: i32,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub ideas: Vec<IdeaDto>,
}

/// Summary row shown on the home page and the session detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BrainstormSessionSummaryDto {
    pub id: i32,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub idea_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateBrainstormSessionDto {
    #[serde(default)]
    pub session_name: String,
}
