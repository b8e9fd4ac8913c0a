//! Domain & parameter models for ideas
//!
//! Defines the idea domain model owned by a brainstorm session, the parameters for
//! adding an idea, and conversions from entity and into DTOs.

use chrono::{DateTime, Utc};

use crate::{
    model::idea::{CreateIdeaDto, IdeaDto},
    server::model::validation::FieldErrors,
};

/// An idea contributed to exactly one brainstorm session.
#[derive(Debug, Clone, PartialEq)]
pub struct Idea {
    /// Repository-assigned ID; `0` until the owning session has been persisted.
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date_created: DateTime<Utc>,
}

impl Idea {
    /// Creates an unsaved idea stamped with the current time.
    pub fn new(name: String, description: String) -> Self {
        Self {
            id: 0,
            name,
            description,
            date_created: Utc::now(),
        }
    }

    /// Whether the repository has assigned this idea an ID.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Converts an entity model to the idea domain model
    pub fn from_entity(entity: entity::idea::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            date_created: entity.date_created,
        }
    }

    /// Converts the domain model into its API representation
    pub fn into_dto(self) -> IdeaDto {
        IdeaDto {
            id: self.id,
            name: self.name,
            description: self.description,
            date_created: self.date_created,
        }
    }
}

/// Parameters for adding a new idea to an existing session
#[derive(Debug, Clone)]
pub struct CreateIdeaParam {
    pub session_id: i32,
    pub name: String,
    pub description: String,
}

impl CreateIdeaParam {
    /// Checks required fields, reporting errors under their wire names.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("name", "Name", &self.name);
        errors.into_result()
    }
}

impl From<CreateIdeaDto> for CreateIdeaParam {
    fn from(dto: CreateIdeaDto) -> Self {
        Self {
            session_id: dto.session_id,
            name: dto.name,
            description: dto.description,
        }
    }
}
