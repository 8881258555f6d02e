//! Session workflow.
//!
//! Runs the interactive steps in order: acquire filenames, process the
//! file, optionally show file information.

use crate::cli::console::Console;
use crate::cli::output::{COMPLETED, OutputFormat, format_banner, format_file_info, format_report};
use crate::cli::prompt::{acquire_input, acquire_output};
use crate::core::{FileInfo, ProcessingReport, char_count, transform};
use crate::error::{Error, Result};
use crate::io::{read_file, write_file};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Runs one complete interactive session.
///
/// Errors from the processing phase and the file-information step are
/// reported on the console and do not end the session.
///
/// # Errors
///
/// Returns [`Error::Interrupted`] when console input runs out, or a
/// console error when the terminal can't be written.
pub fn execute<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    format: OutputFormat,
) -> Result<()> {
    console.say(&format_banner())?;

    let input = acquire_input(console)?;
    let output = acquire_output(console, &input)?;

    match process_file(console, &input, &output) {
        Ok(report) => console.write(&format_report(&report, format))?,
        Err(Error::Io(e)) => {
            warn!(error = %e, "processing failed");
            console.say(&format!("Error during file processing: {e}"))?;
        }
        Err(e) => return Err(e),
    }

    offer_file_info(console, format)?;

    console.say(&format!("\n{COMPLETED}"))?;
    Ok(())
}

/// Reads `input`, transforms it and writes the result to `output`.
///
/// Progress lines are written to the console as each step completes.
pub fn process_file<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    input: &str,
    output: &str,
) -> Result<ProcessingReport> {
    console.say(&format!("\nReading file: {input}"))?;
    let content = read_file(input)?;
    console.say(&format!(
        "Successfully read {} characters",
        char_count(&content)
    ))?;

    let modified = transform(&content);

    console.say(&format!("Writing to file: {output}"))?;
    write_file(output, &modified)?;

    let report = ProcessingReport::new(input, output, &content, &modified);
    info!(
        input,
        output,
        original_chars = report.original_chars,
        modified_chars = report.modified_chars,
        "file processed"
    );
    Ok(report)
}

/// Computes line, word and character counts for `path`.
pub fn file_info(path: &str) -> Result<FileInfo> {
    let content = read_file(path)?;
    Ok(FileInfo::from_content(path, &content))
}

fn offer_file_info<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    format: OutputFormat,
) -> Result<()> {
    if !console.confirm("\nWould you like to see file information? (y/n): ")? {
        return Ok(());
    }

    let answer = console.ask("Enter filename to get info: ")?;
    let path = answer.trim();
    if path.is_empty() {
        return Ok(());
    }

    match file_info(path) {
        Ok(info) => console.write(&format_file_info(&info, format)),
        Err(Error::Io(e)) => console.say(&format!("Error getting file info: {e}")),
        Err(e) => Err(e),
    }
}
