//! csproj2tsconfig's main application entry point.
//! Parses command-line arguments, wires up the disk-backed converter, and
//! maps the run outcome to a process exit code.

use csproj2tsconfig::{
    cli::get_args,
    converter::{Converter, DiskFileSystem, SystemClock},
    error::default_error_handler,
    runner::{Runner, StderrStream},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let file_system = DiskFileSystem;
    let clock = SystemClock;
    let converter = Converter::new(&file_system, &clock);
    let error_stream = StderrStream;
    let runner = Runner::new(converter, &file_system, &error_stream);

    match runner.run(&args) {
        Ok(status) => std::process::exit(status.as_exit_code()),
        Err(err) => default_error_handler(err),
    }
}
