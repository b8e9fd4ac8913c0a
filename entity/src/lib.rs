//! SeaORM entity models for the brainstorm database schema.

pub mod prelude;

pub mod brainstorm_session;
pub mod idea;
