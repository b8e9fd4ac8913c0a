use dioxus_logger::tracing;

use crate::server::{
    data::SessionRepository,
    error::AppError,
    model::brainstorm_session::{BrainstormSession, CreateBrainstormSessionParam},
};

pub struct BrainstormSessionService<'a> {
    sessions: &'a dyn SessionRepository,
}

impl<'a> BrainstormSessionService<'a> {
    pub fn new(sessions: &'a dyn SessionRepository) -> Self {
        Self { sessions }
    }

    /// Gets every session ordered by ID
    pub async fn list(&self) -> Result<Vec<BrainstormSession>, AppError> {
        tracing::info!("Loading brainstorm sessions");

        let sessions = self.sessions.list().await.map_err(|err| {
            tracing::error!(error = %err, "Failed to list brainstorm sessions");
            AppError::Persistence(err)
        })?;

        tracing::info!(session_count = sessions.len(), "Listed brainstorm sessions");

        Ok(sessions)
    }

    /// Creates a new, empty session stamped with the current time
    ///
    /// # Returns
    /// - `Ok(BrainstormSession)` - The stored session with its assigned ID
    /// - `Err(AppError::Validation)` - The session name is missing
    /// - `Err(AppError::Persistence)` - Repository failed to store the session
    pub async fn create(
        &self,
        param: CreateBrainstormSessionParam,
    ) -> Result<BrainstormSession, AppError> {
        tracing::debug!(session_name = %param.name, "Creating brainstorm session");

        if let Err(errors) = param.validate() {
            tracing::warn!(errors = %errors, "Invalid brainstorm session submitted");
            return Err(errors.into());
        }

        let session = self.sessions.add(param).await.map_err(|err| {
            tracing::error!(error = %err, "Failed to create brainstorm session");
            AppError::Persistence(err)
        })?;

        tracing::info!(
            session_id = session.id,
            session_name = %session.name,
            "Created brainstorm session"
        );

        Ok(session)
    }

    /// Gets a single session by ID
    ///
    /// Returns None if the session doesn't exist
    pub async fn get_detail(&self, id: i32) -> Result<Option<BrainstormSession>, AppError> {
        let session = self.sessions.get_by_id(id).await.map_err(|err| {
            tracing::error!(session_id = id, error = %err, "Failed to load session");
            AppError::Persistence(err)
        })?;

        match &session {
            Some(session) => tracing::info!(
                session_id = id,
                idea_count = session.idea_count(),
                "Retrieved brainstorm session"
            ),
            None => tracing::warn!(session_id = id, "Session not found"),
        }

        Ok(session)
    }
}
