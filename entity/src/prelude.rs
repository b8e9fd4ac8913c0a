pub use super::brainstorm_session::Entity as BrainstormSession;
pub use super::idea::Entity as Idea;
