//! Error handling for the whydoc application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for whydoc operations.
///
/// This enum represents all possible errors that can occur while scanning
/// a project for tags and generating documentation from templates.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents file system errors for which the offending path is known
    #[error("Cannot read '{}': {source}.", .path.display())]
    PathError { path: PathBuf, source: io::Error },

    /// Represents errors reported by the ignore-aware project walk
    #[error("Scan error: {0}.")]
    WalkError(#[from] ignore::Error),

    /// Represents errors in locating or reading template files
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents a template header that is not valid YAML
    #[error("Invalid header in '{}': {source}.", .path.display())]
    HeaderError { path: PathBuf, source: serde_yaml::Error },

    /// Represents a tag marker that carries no tag name
    #[error("Invalid tag marker in '{}' at line {line}: missing tag name.", .path.display())]
    MarkerError { path: PathBuf, line: usize },

    /// Represents errors raised by the template engine during
    /// compilation or rendering
    #[error("Render error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents a batch run in which one or more templates failed
    #[error("Generation failed for {failed} template(s).")]
    GenerationError { failed: usize },
}

/// Convenience type alias for Results with whydoc's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
