//! Program runner: validates settings and files before running a
//! conversion, mapping outcomes to process status codes.
//! Validation failures are accumulated and all reported before aborting
//! rather than failing on the first.

use crate::cli::Args;
use crate::converter::{Converter, FileSystem};
use crate::error::{ConverterError, ConverterResult};
use crate::settings::parse_settings;

/// Possible status codes from attempting to run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatusCode {
    /// An unexpected error aborted the run.
    UnknownError,

    /// Conversion completed.
    Success,

    /// A required argument was missing or malformed.
    MissingArguments,

    /// A referenced input file does not exist.
    FileNotFound,
}

impl StatusCode {
    /// The process exit code for the status.
    pub fn as_exit_code(self) -> i32 {
        match self {
            StatusCode::UnknownError => 255,
            StatusCode::Success => 0,
            StatusCode::MissingArguments => 1,
            StatusCode::FileNotFound => 2,
        }
    }
}

/// Receives human-readable validation errors.
pub trait ErrorStream {
    /// Reports one validation error.
    fn error(&self, message: &str);
}

/// Writes validation errors to stderr.
pub struct StderrStream;

impl ErrorStream for StderrStream {
    fn error(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Runs the csproj-to-tsconfig program.
pub struct Runner<'a> {
    converter: Converter<'a>,
    file_system: &'a dyn FileSystem,
    error_stream: &'a dyn ErrorStream,
}

impl<'a> Runner<'a> {
    /// Initializes a new Runner over the given collaborators.
    pub fn new(
        converter: Converter<'a>,
        file_system: &'a dyn FileSystem,
        error_stream: &'a dyn ErrorStream,
    ) -> Self {
        Self { converter, file_system, error_stream }
    }

    /// Runs the program.
    ///
    /// # Arguments
    /// * `args` - Raw settings to convert files
    ///
    /// # Returns
    /// * Status from attempting to run the program
    pub fn run(&self, args: &Args) -> ConverterResult<StatusCode> {
        if !self.ensure_settings_exist(args) {
            return Ok(StatusCode::MissingArguments);
        }

        let settings = match parse_settings(args) {
            Ok(settings) => settings,
            Err(ConverterError::SettingsError(message)) => {
                self.error_stream.error(&message);
                return Ok(StatusCode::MissingArguments);
            }
            Err(error) => return Err(error),
        };

        if !self.ensure_files_exist(args) {
            return Ok(StatusCode::FileNotFound);
        }

        self.converter.convert(&settings)?;

        Ok(StatusCode::Success)
    }

    /// Ensures all required settings exist for a conversion, reporting every
    /// missing one.
    fn ensure_settings_exist(&self, args: &Args) -> bool {
        let mut errors = Vec::new();

        if args.csproj.as_os_str().is_empty() {
            errors.push("Missing required argument: csproj".to_string());
        }

        if args.target.is_none() && args.reference.is_none() {
            errors.push("Missing required argument: target or reference".to_string());
        }

        self.report(&errors)
    }

    /// Ensures all required files exist for a conversion, reporting every
    /// missing one.
    fn ensure_files_exist(&self, args: &Args) -> bool {
        let mut errors = Vec::new();

        let mut check = |path: &std::path::Path, name: &str| {
            if !self.file_system.exists(path) {
                errors.push(format!(
                    "Missing required file: {} (checked '{}').",
                    name,
                    path.display()
                ));
            }
        };

        check(&args.csproj, "csproj");

        if let Some(template) = &args.template {
            check(template, "template");
        } else if let Some(target) = &args.target {
            // The target doubles as the template when none is given.
            check(target, "template");
        }

        self.report(&errors)
    }

    /// Reports accumulated validation errors, all of them, to the error
    /// stream.
    ///
    /// # Returns
    /// * Whether validation passed (no errors)
    fn report(&self, errors: &[String]) -> bool {
        for error in errors {
            self.error_stream.error(error);
        }

        errors.is_empty()
    }
}
