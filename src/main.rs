//! Binary entry point for the file processor.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use file_processor::Error;
use file_processor::cli::output::{FAREWELL, format_unexpected};
use file_processor::cli::{Cli, Console, OutputFormat, execute};
use file_processor::logging::init_logging;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::warn;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = OutputFormat::parse(&cli.format);

    // The prompt loop blocks in read_line, so the handler ends the process itself.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = writeln!(io::stdout(), "\n\n{FAREWELL}");
        std::process::exit(0);
    }) {
        warn!(error = %e, "failed to install interrupt handler");
    }

    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match execute(&mut console, format) {
        Ok(()) => {}
        Err(Error::Interrupted) => emit(&format!("\n\n{FAREWELL}")),
        Err(e) => emit(&format!("\n{}", format_unexpected(&e))),
    }

    ExitCode::SUCCESS
}

/// Writes a closing line to stdout, tolerating a closed pipe.
fn emit(message: &str) {
    if let Err(e) = writeln!(io::stdout(), "{message}")
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        eprintln!("Error writing to stdout: {e}");
    }
}
