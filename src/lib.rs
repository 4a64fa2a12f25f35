pub mod audit;
pub mod command;
pub mod config;
pub mod error;
pub mod git;
pub mod nlp;
pub mod ui;

// Re-export commonly used types for convenience
pub use command::{CandidateSet, SplitNote, generate};
pub use error::{AppError, AppResult, NlpError, NlpResult};
pub use nlp::{DependencyParser, PosTag, Token, extract_table};
