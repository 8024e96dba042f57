pub mod department;

// Re-exports
pub use department::*;
