//! I/O utilities for the file processor.
//!
//! Provides file reading with memory mapping support for large files,
//! plain writing, and the accessibility probes used by the prompts.

pub mod probe;
pub mod reader;

pub use probe::{OutputProbe, probe_output, probe_readable, same_file};
pub use reader::{FileReader, normalize_newlines, read_file, write_file};
