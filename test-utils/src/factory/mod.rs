//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let session = factory::create_session(&db).await?;
//! let idea = factory::create_idea(&db, session.id).await?;
//!
//! let (session, ideas) = factory::helpers::create_session_with_ideas(&db, 3).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let session = factory::brainstorm_session::BrainstormSessionFactory::new(&db)
//!     .name("Retro")
//!     .build()
//!     .await?;
//! ```

pub mod brainstorm_session;
pub mod helpers;
pub mod idea;

pub use brainstorm_session::create_session;
pub use idea::create_idea;
