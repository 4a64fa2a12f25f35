pub mod generator;

// Re-export commonly used types
pub use generator::{CandidateSet, GenerateError, SplitNote, generate};
