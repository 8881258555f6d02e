//! Statistics reported to the user.

use crate::core::transform::char_count;
use serde::Serialize;

/// Outcome of one read/transform/write run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessingReport {
    /// File that was read.
    pub input: String,
    /// File that was written.
    pub output: String,
    /// Characters in the input file.
    pub original_chars: usize,
    /// Characters written, header included.
    pub modified_chars: usize,
}

impl ProcessingReport {
    /// Builds a report from the original and transformed content.
    #[must_use]
    pub fn new(input: &str, output: &str, original: &str, modified: &str) -> Self {
        Self {
            input: input.to_string(),
            output: output.to_string(),
            original_chars: char_count(original),
            modified_chars: char_count(modified),
        }
    }
}

/// Line, word and character counts of a file.
///
/// # Examples
///
/// ```
/// use file_processor::core::FileInfo;
///
/// let info = FileInfo::from_content("notes.txt", "one two\nthree");
/// assert_eq!(info.lines, 2);
/// assert_eq!(info.words, 3);
/// assert_eq!(info.characters, 13);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Path the counts were taken from.
    pub path: String,
    /// Newline-terminated lines plus a trailing partial line.
    pub lines: usize,
    /// Whitespace-separated words.
    pub words: usize,
    /// Characters (Unicode scalar values).
    pub characters: usize,
}

impl FileInfo {
    /// Computes counts for already-loaded content.
    #[must_use]
    pub fn from_content(path: &str, content: &str) -> Self {
        Self {
            path: path.to_string(),
            lines: content.split_inclusive('\n').count(),
            words: content.split_whitespace().count(),
            characters: char_count(content),
        }
    }
}
