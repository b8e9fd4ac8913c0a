//! Data transfer objects shared between the server API and the web client.

pub mod api;
pub mod brainstorm_session;
pub mod idea;
