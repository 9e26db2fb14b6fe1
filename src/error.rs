//! Error handling for dx-scaffold.
//! Every fallible operation in the crate returns [`Result`]; only the top-level
//! caller in [`crate::cli`] decides on the exit status.

use std::io;
use thiserror::Error;

/// Failure reasons of a scaffolding run.
#[derive(Error, Debug)]
pub enum Error {
    /// The project name was empty or blank after trimming.
    #[error("Invalid project name: the name must contain at least one non-whitespace character.")]
    InvalidName,

    /// The templates root or the selected template directory is missing.
    #[error("Cannot proceed: template '{template}' does not exist.")]
    TemplateNotFound { template: String },

    /// The destination directory for the new project already exists.
    #[error("Cannot proceed: destination '{path}' already exists.")]
    DestinationExists { path: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    #[error("Failed to walk directory tree. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    /// The package manifest could not be parsed as JSON.
    #[error("Failed to parse manifest '{path}'. Original error: {source}")]
    ManifestParse { path: String, source: serde_json::Error },

    /// Represents failures of the interactive prompt backend
    #[error("Prompt error: {0}.")]
    Prompt(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}
