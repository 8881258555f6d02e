//! Filename acquisition loops.
//!
//! Each loop keeps asking until it gets an acceptable answer. File errors
//! are reported and reprompted; only console failures and interruption
//! leave the loop.

use crate::cli::console::Console;
use crate::cli::output::describe_input_error;
use crate::error::{Error, Result};
use crate::io::{OutputProbe, probe_output, probe_readable, same_file};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Prompts until the user names a readable UTF-8 text file.
pub fn acquire_input<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<String> {
    loop {
        let answer = console.ask("Enter the input filename: ")?;
        let name = answer.trim();

        if name.is_empty() {
            console.say("Error: Filename cannot be empty. Please try again.")?;
            continue;
        }

        match probe_readable(name) {
            Ok(()) => {
                debug!(input = name, "input accepted");
                return Ok(name.to_string());
            }
            Err(Error::Io(e)) => {
                warn!(input = name, error = %e, "input rejected");
                console.say(&describe_input_error(name, &e))?;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Prompts until the user names a usable output file for `input`.
///
/// Empty names and names referring to the input file are rejected. When
/// the target already exists the user must confirm the overwrite, and a
/// refusal asks for another name.
pub fn acquire_output<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    input: &str,
) -> Result<String> {
    loop {
        let answer = console.ask("Enter the output filename: ")?;
        let name = answer.trim();

        if name.is_empty() {
            console.say("Error: Output filename cannot be empty.")?;
            continue;
        }

        if name == input || same_file(name, input) {
            console.say("Error: Output filename cannot be the same as input filename.")?;
            continue;
        }

        match probe_output(name) {
            Ok(OutputProbe::Absent) => return Ok(name.to_string()),
            Ok(OutputProbe::Exists) => {
                let prompt = format!("File '{name}' already exists. Overwrite? (y/n): ");
                if console.confirm(&prompt)? {
                    debug!(output = name, "overwrite confirmed");
                    return Ok(name.to_string());
                }
            }
            Err(Error::Io(e)) => {
                warn!(output = name, error = %e, "output rejected");
                console.say(&format!("Error checking output file: {e}"))?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn console(input: String) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.into_bytes()), Vec::new())
    }

    fn transcript(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_acquire_input_retries_until_readable() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        let binary = temp_dir.path().join("binary.bin");
        std::fs::write(&good, "hello").unwrap();
        std::fs::write(&binary, [0xff, 0x00]).unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let mut c = console(format!(
            "\n   \n{}\n{}\n{}\n",
            missing.display(),
            binary.display(),
            good.display()
        ));
        let name = acquire_input(&mut c).unwrap();
        assert_eq!(name, good.to_string_lossy());

        let out = transcript(c);
        assert_eq!(out.matches("Filename cannot be empty").count(), 2);
        assert!(out.contains("not found"));
        assert!(out.contains("binary file"));
        assert_eq!(out.matches("Enter the input filename: ").count(), 5);
    }

    #[test]
    fn test_acquire_input_directory_is_generic_error() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("good.txt");
        std::fs::write(&good, "hello").unwrap();

        let mut c = console(format!(
            "{}\n{}\n",
            temp_dir.path().display(),
            good.display()
        ));
        acquire_input(&mut c).unwrap();
        assert!(transcript(c).contains("Unexpected error:"));
    }

    #[test]
    fn test_acquire_input_eof_interrupts() {
        let mut c = console("\n".to_string());
        assert!(matches!(acquire_input(&mut c), Err(Error::Interrupted)));
    }

    #[test]
    fn test_acquire_output_rejects_empty_and_same_name() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.txt");
        std::fs::write(&input, "x").unwrap();
        let input_str = input.to_string_lossy().to_string();
        let aliased = temp_dir.path().join(".").join("in.txt");
        let fresh = temp_dir.path().join("out.txt");

        let mut c = console(format!(
            "\n{input_str}\n{}\n{}\n",
            aliased.display(),
            fresh.display()
        ));
        let name = acquire_output(&mut c, &input_str).unwrap();
        assert_eq!(name, fresh.to_string_lossy());

        let out = transcript(c);
        assert!(out.contains("Output filename cannot be empty."));
        assert_eq!(
            out.matches("cannot be the same as input filename").count(),
            2
        );
    }

    #[test]
    fn test_acquire_output_declined_overwrite_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("existing.txt");
        std::fs::write(&existing, "keep me").unwrap();
        let fresh = temp_dir.path().join("fresh.txt");

        let mut c = console(format!(
            "{}\nn\n{}\n",
            existing.display(),
            fresh.display()
        ));
        let name = acquire_output(&mut c, "in.txt").unwrap();
        assert_eq!(name, fresh.to_string_lossy());
        assert!(transcript(c).contains("already exists. Overwrite? (y/n): "));
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "keep me");
    }

    #[test]
    fn test_acquire_output_confirmed_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let existing = temp_dir.path().join("existing.txt");
        std::fs::write(&existing, "old").unwrap();

        let mut c = console(format!("{}\nY\n", existing.display()));
        let name = acquire_output(&mut c, "in.txt").unwrap();
        assert_eq!(name, existing.to_string_lossy());
    }

    #[test]
    fn test_acquire_output_directory_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let fresh = temp_dir.path().join("fresh.txt");

        let mut c = console(format!(
            "{}\n{}\n",
            temp_dir.path().display(),
            fresh.display()
        ));
        acquire_output(&mut c, "in.txt").unwrap();
        assert!(transcript(c).contains("Error checking output file:"));
    }
}
