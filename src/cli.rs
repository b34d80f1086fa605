//! Command-line interface implementation for csproj2tsconfig.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::runner::StatusCode;

/// Command-line arguments structure for csproj2tsconfig.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "csproj2tsconfig: converts .csproj build manifests to tsconfig.json and /// references files",
    long_about = None
)]
pub struct Args {
    /// File path to the source .csproj file
    #[arg(long, value_name = "CSPROJ")]
    pub csproj: PathBuf,

    /// File path to the target tsconfig.json file
    #[arg(long, value_name = "TARGET")]
    pub target: Option<PathBuf>,

    /// File path to the template tsconfig.json file, if not the target
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// File path to an output /// references file
    #[arg(long, value_name = "REFERENCE")]
    pub reference: Option<PathBuf>,

    /// Include a generated timestamp comment atop output files
    #[arg(long)]
    pub timestamp: bool,

    /// Timestamp locale, if not en-US
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// key=value MSBuild pair to replace in raw source paths.
    /// `$(name)=value` replaces property tokens, `@(name)=value` item
    /// tokens, and anything else matches whole resolved file names.
    /// May be given multiple times.
    #[arg(long = "replacement", value_name = "KEY=VALUE")]
    pub replacement: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With the missing-arguments status code if required arguments are
///   missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(StatusCode::MissingArguments.as_exit_code());
            } else {
                e.exit();
            }
        }
    }
}
