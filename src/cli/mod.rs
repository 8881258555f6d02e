//! CLI layer for the file processor.
//!
//! Argument parsing with clap, the line-oriented console, the filename
//! prompts and the session workflow.

pub mod commands;
pub mod console;
pub mod output;
pub mod parser;
pub mod prompt;

pub use commands::execute;
pub use console::Console;
pub use output::OutputFormat;
pub use parser::Cli;
