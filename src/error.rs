use std::io;
use thiserror::Error;

// Import module-level errors for AppError
use crate::command::generator::GenerateError;
use crate::config::settings::ConfigError;
use crate::git::executor::GitRunError;
use crate::ui::menu::MenuError;

/// Errors from the dependency-parser collaborator
#[derive(Debug, Error)]
pub enum NlpError {
    #[error("Failed to launch parser '{script}': {source}")]
    ParserLaunch {
        script: String,
        #[source]
        source: io::Error,
    },

    #[error("Parser exited with code {code}: {stderr}")]
    ParserFailed { code: i32, stderr: String },

    #[error("Could not locate parse output: no row starting with \"1\"")]
    NoParseOutput,

    #[error("Malformed parser output row: {0}")]
    MalformedRow(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level application error that wraps all module-specific errors
///
/// This provides a unified error type for application-level code while preserving
/// the specific error context from each module. All module errors automatically
/// convert to AppError via the `From` trait.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Parser error: {0}")]
    Nlp(#[from] NlpError),

    #[error("Command generation error: {0}")]
    Generate(#[from] GenerateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Menu error: {0}")]
    Menu(#[from] MenuError),

    #[error("Git execution error: {0}")]
    GitRun(#[from] GitRunError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for parser-collaborator operations
pub type NlpResult<T> = std::result::Result<T, NlpError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
