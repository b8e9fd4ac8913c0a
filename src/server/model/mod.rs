//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the input of a
//! single operation and own its validation rules.

pub mod brainstorm_session;
pub mod idea;
pub mod validation;
