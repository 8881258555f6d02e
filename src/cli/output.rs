//! Output formatting for the interactive session.
//!
//! Every user-facing message lives here. The report and file-information
//! blocks support text and JSON.

use crate::core::{FileInfo, ProcessingReport};
use crate::error::{Error, IoError};
use serde::Serialize;
use std::fmt::Write;

/// Title shown when the session starts.
pub const TITLE: &str = "File Processor - Read, Modify, and Write Files";

/// Message printed when the user interrupts the program.
pub const FAREWELL: &str = "Program interrupted by user. Goodbye!";

/// Message printed when the session ends normally.
pub const COMPLETED: &str = "Program completed successfully!";

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats the opening banner.
#[must_use]
pub fn format_banner() -> String {
    format!("{TITLE}\n{}", "=".repeat(50))
}

/// Describes why an input file was rejected.
#[must_use]
pub fn describe_input_error(path: &str, err: &IoError) -> String {
    match err {
        IoError::FileNotFound { .. } => {
            format!("Error: File '{path}' not found. Please check the filename.")
        }
        IoError::PermissionDenied { .. } => {
            format!("Error: Permission denied to read '{path}'.")
        }
        IoError::DecodeFailure { .. } => {
            format!("Error: Cannot decode file '{path}'. It might be a binary file.")
        }
        other => format!("Unexpected error: {other}"),
    }
}

/// Formats a processing report.
#[must_use]
pub fn format_report(report: &ProcessingReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_report_text(report),
        OutputFormat::Json => format_json(report) + "\n",
    }
}

fn format_report_text(report: &ProcessingReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Success! Modified content written to '{}'",
        report.output
    );
    let _ = writeln!(output, "Original size: {} characters", report.original_chars);
    let _ = writeln!(output, "Modified size: {} characters", report.modified_chars);
    output
}

/// Formats file information.
#[must_use]
pub fn format_file_info(info: &FileInfo, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "\nFile Information for '{}':", info.path);
            let _ = writeln!(output, "   Lines: {}", info.lines);
            let _ = writeln!(output, "   Characters: {}", info.characters);
            let _ = writeln!(output, "   Words: {}", info.words);
            output
        }
        OutputFormat::Json => format_json(info) + "\n",
    }
}

/// Formats an error that escaped the session.
#[must_use]
pub fn format_unexpected(err: &Error) -> String {
    format!("Unexpected error in main program: {err}")
}

/// Formats a value as JSON.
fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
