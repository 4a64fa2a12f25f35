pub mod executor;

// Re-export commonly used types
pub use executor::{GitRunError, GitRunner, RunOutput};
