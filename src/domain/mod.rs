pub mod person;

// Re-exports for convenience
pub use person::*;
