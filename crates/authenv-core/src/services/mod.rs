//! Core services.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod authority_environment;

pub use authority_environment::AuthorityEnvironmentManager;
