//! Error handling for cpp-scaffold.
//! Defines the error type shared by every tool and the handler the binaries
//! use to turn fatal errors into a non-zero exit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised by the scaffold tools.
///
/// Per-file formatter and linter problems are not represented here; they are
/// reported through [`crate::tool::ToolOutcome`] and only influence the exit
/// code of a batch.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors reported by libgit2
    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    /// Represents errors that occur while loading or rendering a template
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors while reading or writing JSON metadata
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents an invalid file-matching pattern
    #[error("Pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// Represents invalid configuration values
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Templates directory not found at {templates_dir}.")]
    TemplatesDirNotFound { templates_dir: String },

    #[error("Cannot write '{}': {source}.", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Target directory is not empty: {target_dir}. Please use an empty directory or remove existing files.")]
    TargetNotEmpty { target_dir: String },

    #[error("Failed to clone repository '{url}': {source}.")]
    CloneError {
        url: String,
        #[source]
        source: git2::Error,
    },
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to report
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
