//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through
//! Axum's state extraction.

use std::sync::Arc;

use crate::server::data::SessionRepository;

#[derive(Clone)]
pub struct AppState {
    /// Session repository shared by every request.
    ///
    /// Production uses the SeaORM repository; tests substitute the in-memory one.
    pub sessions: Arc<dyn SessionRepository>,
}

impl AppState {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }
}
