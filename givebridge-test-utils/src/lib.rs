//! Shared test tooling for the givebridge workspace.
//!
//! Provides an in-memory SQLite database with on-demand table creation and
//! fixture factories for the core entities, so repository and service tests
//! stay declarative.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
