//! Brainstorm session factory for creating test session entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let session = BrainstormSessionFactory::new(&db)
///     .name("Retro")
///     .build()
///     .await?;
/// ```
pub struct BrainstormSessionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    date_created: DateTime<Utc>,
}

impl<'a> BrainstormSessionFactory<'a> {
    /// Creates a new factory with default values.
    ///
    /// Defaults:
    /// - name: `"Session {id}"` where id is auto-incremented
    /// - date_created: `Utc::now()`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Session {}", id),
            date_created: Utc::now(),
        }
    }

    /// Sets the session name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the creation timestamp.
    pub fn date_created(mut self, date_created: DateTime<Utc>) -> Self {
        self.date_created = date_created;
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::brainstorm_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::brainstorm_session::Model, DbErr> {
        entity::brainstorm_session::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            date_created: ActiveValue::Set(self.date_created),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session with default values.
///
/// Shorthand for `BrainstormSessionFactory::new(db).build().await`.
pub async fn create_session(
    db: &DatabaseConnection,
) -> Result<entity::brainstorm_session::Model, DbErr> {
    BrainstormSessionFactory::new(db).build().await
}
