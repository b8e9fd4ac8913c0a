use dioxus_logger::tracing;

use crate::server::{
    data::SessionRepository,
    error::AppError,
    model::{
        brainstorm_session::BrainstormSession,
        idea::{CreateIdeaParam, Idea},
    },
};

pub struct IdeaService<'a> {
    sessions: &'a dyn SessionRepository,
}

impl<'a> IdeaService<'a> {
    pub fn new(sessions: &'a dyn SessionRepository) -> Self {
        Self { sessions }
    }

    /// Lists the ideas of a session in the order they were added
    ///
    /// # Returns
    /// - `Ok(Vec<Idea>)` - Ideas of the session, empty if it has none
    /// - `Err(AppError::SessionNotFound)` - No session with the given ID
    /// - `Err(AppError::Persistence)` - Repository failed to load the session
    pub async fn list_for_session(&self, session_id: i32) -> Result<Vec<Idea>, AppError> {
        tracing::info!(session_id, "Fetching ideas for session");

        let session = self.sessions.get_by_id(session_id).await.map_err(|err| {
            tracing::error!(session_id, error = %err, "Failed to load session");
            AppError::Persistence(err)
        })?;

        let Some(session) = session else {
            tracing::warn!(session_id, "Session not found");
            return Err(AppError::SessionNotFound(session_id));
        };

        tracing::info!(
            session_id,
            idea_count = session.idea_count(),
            "Retrieved ideas for session"
        );

        Ok(session.ideas)
    }

    /// Appends a new idea to an existing session and persists it.
    ///
    /// The idea's creation time is taken from the server clock; any timestamp sent by
    /// the client is ignored. Nothing is written unless validation passes and the
    /// session exists.
    ///
    /// # Returns
    /// - `Ok(BrainstormSession)` - The session as stored after the idea was added
    /// - `Err(AppError::Validation)` - The idea name is missing
    /// - `Err(AppError::SessionNotFound)` - No session with the given ID
    /// - `Err(AppError::Persistence)` - Repository failed to load or store the session
    pub async fn create(&self, param: CreateIdeaParam) -> Result<BrainstormSession, AppError> {
        let session_id = param.session_id;
        tracing::debug!(session_id, idea_name = %param.name, "Creating idea");

        if let Err(errors) = param.validate() {
            tracing::warn!(session_id, errors = %errors, "Invalid idea submitted");
            return Err(errors.into());
        }

        let session = self.sessions.get_by_id(session_id).await.map_err(|err| {
            tracing::error!(session_id, error = %err, "Failed to load session");
            AppError::Persistence(err)
        })?;

        let Some(mut session) = session else {
            tracing::warn!(session_id, "Session not found");
            return Err(AppError::SessionNotFound(session_id));
        };

        let idea_name = param.name.clone();
        session.add_idea(Idea::new(param.name, param.description));

        let session = self.sessions.update(&session).await.map_err(|err| {
            tracing::error!(session_id, error = %err, "Failed to save idea");
            AppError::Persistence(err)
        })?;

        tracing::info!(
            session_id,
            idea_name = %idea_name,
            idea_count = session.idea_count(),
            "Added idea to session"
        );

        Ok(session)
    }
}
