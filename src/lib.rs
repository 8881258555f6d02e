//! # File Processor
//!
//! Interactive command-line utility that reads a text file, normalizes
//! its spacing, writes the result to a new file and reports statistics.
//!
//! ## Features
//!
//! - **Validated prompts**: filenames are probed and reprompted until usable
//! - **Literal transform**: double spaces and triple newlines are collapsed
//!   once, left to right, and a character-count header is prepended
//! - **Memory Mapping**: Efficient handling of large files
//! - **File information**: line, word and character counts on request

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod logging;

// Re-export commonly used types at crate root
pub use error::{Error, IoError, Result};

// Re-export core domain types
pub use crate::core::{FileInfo, ProcessingReport, transform};

// Re-export CLI types
pub use cli::{Cli, Console, OutputFormat, execute};
