//! Domain & parameter models for brainstorm sessions
//!
//! Defines the session domain model with its ordered ideas, the parameters for
//! creating a session, and conversions into the full and summary DTOs.

use chrono::{DateTime, Utc};

use crate::{
    model::brainstorm_session::{
        BrainstormSessionDto, BrainstormSessionSummaryDto, CreateBrainstormSessionDto,
    },
    server::model::{idea::Idea, validation::FieldErrors},
};

/// A named brainstorming session owning an ordered list of ideas.
///
/// Sessions are only ever mutated by appending ideas; the creation timestamp never
/// changes after the repository stores the session.
#[derive(Debug, Clone, PartialEq)]
pub struct BrainstormSession {
    pub id: i32,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub ideas: Vec<Idea>,
}

impl BrainstormSession {
    /// Converts a session entity and its idea entities into the domain model.
    ///
    /// Ideas are ordered by ID, which matches the order they were added in.
    pub fn from_entity(
        entity: entity::brainstorm_session::Model,
        ideas: Vec<entity::idea::Model>,
    ) -> Self {
        let mut ideas: Vec<Idea> = ideas.into_iter().map(Idea::from_entity).collect();
        ideas.sort_by_key(|idea| idea.id);

        Self {
            id: entity.id,
            name: entity.name,
            date_created: entity.date_created,
            ideas,
        }
    }

    /// Appends an idea to the end of the session's idea sequence.
    pub fn add_idea(&mut self, idea: Idea) {
        self.ideas.push(idea);
    }

    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    /// Converts into the summary row used by the home and detail pages
    pub fn to_summary_dto(&self) -> BrainstormSessionSummaryDto {
        BrainstormSessionSummaryDto {
            id: self.id,
            name: self.name.clone(),
            date_created: self.date_created,
            idea_count: self.idea_count(),
        }
    }

    /// Converts into the full representation including every idea
    pub fn into_dto(self) -> BrainstormSessionDto {
        BrainstormSessionDto {
            id: self.id,
            name: self.name,
            date_created: self.date_created,
            ideas: self.ideas.into_iter().map(Idea::into_dto).collect(),
        }
    }
}

/// Parameters for creating a new brainstorm session
#[derive(Debug, Clone)]
pub struct CreateBrainstormSessionParam {
    pub name: String,
}

impl CreateBrainstormSessionParam {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require("sessionName", "SessionName", &self.name);
        errors.into_result()
    }
}

impl From<CreateBrainstormSessionDto> for CreateBrainstormSessionParam {
    fn from(dto: CreateBrainstormSessionDto) -> Self {
        Self {
            name: dto.session_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_entity() -> entity::brainstorm_session::Model {
        entity::brainstorm_session::Model {
            id: 1,
            name: "Retro".to_string(),
            date_created: Utc::now(),
        }
    }

    fn idea_entity(id: i32, name: &str) -> entity::idea::Model {
        entity::idea::Model {
            id,
            session_id: 1,
            name: name.to_string(),
            description: String::new(),
            date_created: Utc::now(),
        }
    }

    #[test]
    fn from_entity_orders_ideas_by_id() {
        let session = BrainstormSession::from_entity(
            session_entity(),
            vec![idea_entity(3, "third"), idea_entity(1, "first")],
        );

        let names: Vec<&str> = session.ideas.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn summary_counts_ideas() {
        let mut session = BrainstormSession::from_entity(session_entity(), vec![]);
        session.add_idea(Idea::new("Use dark mode".to_string(), String::new()));

        let summary = session.to_summary_dto();
        assert_eq!(summary.id, 1);
        assert_eq!(summary.name, "Retro");
        assert_eq!(summary.idea_count, 1);
    }

    #[test]
    fn validate_rejects_missing_session_name() {
        let param = CreateBrainstormSessionParam {
            name: String::new(),
        };

        let errors = param.validate().unwrap_err().into_inner();
        assert!(errors.contains_key("sessionName"));
    }
}
