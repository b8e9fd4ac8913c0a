//! Repository layer for brainstorm sessions.
//!
//! `SessionRepository` is the persistence capability the service layer depends on.
//! `BrainstormSessionRepository` implements it over SeaORM; an in-memory implementation
//! is available to tests. Repositories return domain models, keeping entity models
//! inside this layer.

pub mod brainstorm_session;

#[cfg(test)]
pub mod memory;

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::model::brainstorm_session::{BrainstormSession, CreateBrainstormSessionParam};

pub use brainstorm_session::BrainstormSessionRepository;

/// Persistence operations for brainstorm sessions and the ideas they own.
///
/// Implementations provide their own concurrency safety; callers perform at most one
/// read and one write per request and make no ordering guarantees between concurrent
/// updates of the same session.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Finds a session with its ideas ordered by insertion.
    ///
    /// # Returns
    /// - `Ok(Some(BrainstormSession))` - The session exists
    /// - `Ok(None)` - No session has this ID
    /// - `Err(DbErr)` - Storage error during lookup
    async fn get_by_id(&self, id: i32) -> Result<Option<BrainstormSession>, DbErr>;

    /// Lists every session ordered by ID.
    async fn list(&self) -> Result<Vec<BrainstormSession>, DbErr>;

    /// Stores a new session stamped with the current time and assigns its ID.
    async fn add(&self, param: CreateBrainstormSessionParam) -> Result<BrainstormSession, DbErr>;

    /// Persists ideas appended to `session` since it was loaded.
    ///
    /// Ideas that already have an ID are left untouched. Either every new idea is stored
    /// or none is.
    ///
    /// # Returns
    /// - `Ok(BrainstormSession)` - The stored session with IDs assigned to all ideas
    /// - `Err(DbErr::RecordNotFound)` - The session no longer exists
    /// - `Err(DbErr)` - Storage error; nothing was written
    async fn update(&self, session: &BrainstormSession) -> Result<BrainstormSession, DbErr>;
}
