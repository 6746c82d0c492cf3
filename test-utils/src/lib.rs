//! Statboard Test Utils
//!
//! Shared testing utilities for the statboard bot: a builder for test contexts
//! backed by in-memory SQLite databases, factories inserting rows with sensible
//! defaults, and fixtures producing sheet values without any I/O.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database rows with defaults
//! - **fixture**: Spreadsheet rows and tabs for snapshot tests
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::SentPing;
//!
//! #[tokio::test]
//! async fn test_sent_pings() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(SentPing)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
