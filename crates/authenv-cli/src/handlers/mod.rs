//! Command handlers.
//!
//! Each handler receives the composed `AuthorityEnvironmentManager` and
//! delegates the work to it.

pub mod apply;
pub mod show;
