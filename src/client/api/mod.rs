#[cfg(feature = "web")]
pub mod helper;

#[cfg(feature = "web")]
pub mod brainstorm_session;

#[cfg(feature = "web")]
pub mod idea;

#[cfg(feature = "web")]
pub use brainstorm_session::{get_session, get_sessions};

#[cfg(feature = "web")]
pub use idea::{create_idea, get_ideas_for_session};
