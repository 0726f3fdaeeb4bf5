//! Domain types for authority fixtures.
//!
//! These are pure data types with no database or runtime dependencies.

mod authority;
mod database_type;
mod document;

pub use authority::{AuthorityDefinition, SqlSet};
pub use database_type::{DatabaseType, DatabaseTypeError};
pub use document::{AuthorityLoadError, DocumentFormat};
