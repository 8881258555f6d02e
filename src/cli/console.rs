//! Line-oriented console used by the interactive prompts.
//!
//! Generic over its reader and writer so whole sessions can be scripted
//! against in-memory buffers.

use crate::error::{Error, Result};
use std::io::{BufRead, Write};

/// Prompt/answer console over any buffered reader and writer.
///
/// # Examples
///
/// ```
/// use file_processor::cli::Console;
/// use std::io::Cursor;
///
/// let mut console = Console::new(Cursor::new("notes.txt\n"), Vec::new());
/// let answer = console.ask("File: ").unwrap();
/// assert_eq!(answer, "notes.txt");
/// assert_eq!(console.into_output(), b"File: ");
/// ```
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `line` followed by a newline.
    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Writes `text` as is and flushes.
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Shows `prompt` and reads one line of input.
    ///
    /// The line terminator is stripped; other whitespace is kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] when the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        self.write(prompt)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Interrupted);
        }

        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Asks a yes/no question. Only a bare `y` or `Y` counts as yes;
    /// surrounding whitespace makes it a no.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Interrupted`] when the input is exhausted.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Consumes the console and returns its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
