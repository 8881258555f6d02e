//! Accessibility probes for user-supplied paths.
//!
//! A probe opens a file, checks what the caller needs to know, and drops
//! the handle before returning. Nothing read during a probe is kept.

use crate::error::{IoError, Result};
use crate::io::reader::FileReader;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// What an output probe found at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputProbe {
    /// Nothing exists at the path yet.
    Absent,
    /// A readable file already exists and would be overwritten.
    Exists,
}

/// Checks that `path` names a readable file with UTF-8 content.
///
/// # Errors
///
/// Returns the classified [`IoError`]: not found, permission denied,
/// decode failure, or a generic read failure.
pub fn probe_readable<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let reader = FileReader::open(path)?;
    let _ = reader.read_to_string()?;
    debug!(path = %path.display(), "input probe passed");
    Ok(())
}

/// Checks whether `path` can be used as an output target.
///
/// # Errors
///
/// Returns an error when the path exists but can't be opened (permission
/// denied, ...) or is a directory.
pub fn probe_output<P: AsRef<Path>>(path: P) -> Result<OutputProbe> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "output target absent");
            return Ok(OutputProbe::Absent);
        }
        Err(e) => return Err(IoError::classify(path, &e).into()),
    };

    let metadata = file.metadata().map_err(|e| IoError::classify(path, &e))?;
    if metadata.is_dir() {
        return Err(IoError::Generic(format!("{}: is a directory", path.display())).into());
    }

    debug!(path = %path.display(), "output target exists");
    Ok(OutputProbe::Exists)
}

/// Returns true if both paths resolve to the same existing file.
///
/// Paths that can't be canonicalized (typically because they don't
/// exist) never match.
pub fn same_file<A: AsRef<Path>, B: AsRef<Path>>(a: A, b: B) -> bool {
    match (a.as_ref().canonicalize(), b.as_ref().canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
