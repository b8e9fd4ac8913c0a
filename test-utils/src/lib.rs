//! Brainstorm Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the brainstorm
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and factories for seeding sessions and ideas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for inserting sessions and ideas with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_sessions() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_brainstorm_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let session = factory::create_session(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
