//! Ladderboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the ladder
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories that insert teams, tournaments, ladder entries, and challenges with
//! sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories and dependency helpers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_ladder() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_ladder_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let tournament = factory::create_tournament(db).await?;
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
