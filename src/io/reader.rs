//! File reading and writing with memory mapping support.
//!
//! Small files are read directly; large ones are memory-mapped. Every
//! handle is owned by a value that is dropped as soon as the operation
//! completes, so no file stays open past the call that needed it.

// Memory mapping requires unsafe but is well-documented and safe for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum file size to read into memory (1GB).
const MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// File reader with support for memory mapping.
///
/// Automatically chooses the best reading strategy based on file size:
/// - Small files (< 1MB): Read directly into memory
/// - Large files (>= 1MB): Use memory mapping
///
/// # Examples
///
/// ```no_run
/// use file_processor::io::FileReader;
///
/// let reader = FileReader::open("notes.txt").unwrap();
/// let content = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::FileNotFound`] or [`IoError::PermissionDenied`]
    /// when the file can't be opened for those reasons, and
    /// [`IoError::ReadFailed`] for directories and oversized files.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| IoError::classify(path_ref, &e))?;

        let metadata = file.metadata().map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        if metadata.is_dir() {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: "is a directory".to_string(),
            }
            .into());
        }

        let size = metadata.len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        debug!(path = %path_str, size, "opened file");

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the file content as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DecodeFailure`] if the content is not valid UTF-8,
    /// or a read/mmap error if the bytes can't be loaded.
    pub fn read_to_string(&self) -> Result<String> {
        let bytes = self.read_to_bytes()?;
        String::from_utf8(bytes).map_err(|e| {
            IoError::DecodeFailure {
                path: self.path.clone(),
                offset: e.utf8_error().valid_up_to(),
            }
            .into()
        })
    }

    /// Reads the file content as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails.
    pub fn read_to_bytes(&self) -> Result<Vec<u8>> {
        if self.size >= MMAP_THRESHOLD {
            self.read_mmap_bytes()
        } else {
            self.read_direct_bytes()
        }
    }

    /// Reads bytes using memory mapping.
    fn read_mmap_bytes(&self) -> Result<Vec<u8>> {
        debug!(path = %self.path, "reading via mmap");
        // Safety: We're only reading from the file, which is safe
        let mmap = unsafe {
            Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?
        };

        Ok(mmap.to_vec())
    }

    /// Reads bytes directly into memory.
    #[allow(clippy::cast_possible_truncation)]
    fn read_direct_bytes(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}

/// Reads a file as text, automatically choosing the best method.
///
/// Line endings are normalized: `\r\n` and lone `\r` both become `\n`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use file_processor::io::read_file;
///
/// let content = read_file("example.txt").unwrap();
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = FileReader::open(path)?.read_to_string()?;
    Ok(normalize_newlines(content))
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
///
/// # Examples
///
/// ```
/// use file_processor::io::normalize_newlines;
///
/// assert_eq!(normalize_newlines("a\r\nb\rc".to_string()), "a\nb\nc");
/// ```
#[must_use]
pub fn normalize_newlines(content: String) -> String {
    if !content.contains('\r') {
        return content;
    }
    content.replace("\r\n", "\n").replace('\r', "\n")
}

/// Writes content to a file, creating or truncating it.
///
/// Parent directories are not created; a missing directory is reported
/// as a write failure.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if the file can't be created or written.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();
    let write_failed = |e: std::io::Error| IoError::WriteFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    };

    let mut file = File::create(path_ref).map_err(write_failed)?;
    file.write_all(content.as_bytes()).map_err(write_failed)?;
    file.flush().map_err(write_failed)?;

    debug!(path = %path_str, bytes = content.len(), "wrote file");
    Ok(())
}
