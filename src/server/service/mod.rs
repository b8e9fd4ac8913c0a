//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the session repository. They validate
//! parameters, load and mutate domain models, and decide which `AppError` a failure
//! becomes. Every branch emits a structured log event carrying the IDs involved, so
//! controllers stay free of logging.
//!
//! Services borrow the repository as a trait object, which lets tests swap the
//! SeaORM repository for the in-memory one.

pub mod brainstorm_session;
pub mod idea;

#[cfg(test)]
mod test;
