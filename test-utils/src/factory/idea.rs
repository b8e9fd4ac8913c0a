//! Idea factory for creating test idea entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test ideas attached to an existing session.
pub struct IdeaFactory<'a> {
    db: &'a DatabaseConnection,
    session_id: i32,
    name: String,
    description: String,
}

impl<'a> IdeaFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - name: `"Idea {id}"` where id is auto-incremented
    /// - description: `"Description for idea {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `session_id` - ID of the session the idea belongs to
    pub fn new(db: &'a DatabaseConnection, session_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            session_id,
            name: format!("Idea {}", id),
            description: format!("Description for idea {}", id),
        }
    }

    /// Sets the idea name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the idea description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builds and inserts the idea entity into the database.
    pub async fn build(self) -> Result<entity::idea::Model, DbErr> {
        entity::idea::ActiveModel {
            id: ActiveValue::NotSet,
            session_id: ActiveValue::Set(self.session_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            date_created: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an idea with default values for the specified session.
pub async fn create_idea(
    db: &DatabaseConnection,
    session_id: i32,
) -> Result<entity::idea::Model, DbErr> {
    IdeaFactory::new(db, session_id).build().await
}
