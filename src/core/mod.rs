//! Core domain logic for the file processor.
//!
//! The content transformation and the statistics shown to the user. These
//! are pure functions over strings with no I/O dependencies.

pub mod stats;
pub mod transform;

pub use stats::{FileInfo, ProcessingReport};
pub use transform::{REPLACEMENTS, Replacement, apply_replacements, char_count, header, transform};
