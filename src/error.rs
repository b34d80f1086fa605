//! Error handling for the csproj2tsconfig application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for conversion operations.
///
/// This enum represents all possible errors that can occur while converting
/// a .csproj manifest. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while parsing a tsconfig template
    #[error("Template error: {0}.")]
    TemplateError(#[from] serde_json::Error),

    /// Represents errors in the raw conversion settings
    #[error("Settings error: {0}.")]
    SettingsError(String),
}

/// Convenience type alias for Results with ConverterError as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type ConverterResult<T> = Result<T, ConverterError>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The ConverterError to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with the unknown-error
/// status code
pub fn default_error_handler(err: ConverterError) -> ! {
    eprintln!("{}", err);
    std::process::exit(crate::runner::StatusCode::UnknownError.as_exit_code())
}
