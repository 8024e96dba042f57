//! Personnel - pure domain model for people and their department assignments
//!
//! This crate contains the Person entity, the Department port (interface),
//! and the domain errors for reading a person's manager through their
//! department. It has no dependencies on storage, UI, or any I/O -
//! departments are opaque collaborators supplied and owned by the embedding
//! system.

pub mod domain;
pub mod ports;
pub mod error;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
