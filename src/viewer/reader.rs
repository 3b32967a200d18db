//! File read provider

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

/// Bytes inspected by the binary heuristic
const SNIFF_BYTES: usize = 8192;

/// Why a file could not be shown
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("File not found")]
    NotFound,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Not a regular file")]
    NotAFile,

    #[error("File too large to display ({size} bytes, limit {limit})")]
    TooLarge { size: u64, limit: u64 },

    #[error("Binary file not shown")]
    Binary,

    #[error("Read failed: {0}")]
    Io(io::Error),
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(e),
        }
    }
}

/// Source of file contents
pub trait FileReader: Send + Sync {
    fn read(&self, path: &Path) -> Result<String, ReadError>;
}

/// Reads text files from the local filesystem
#[derive(Debug, Clone, Copy)]
pub struct FsReader {
    max_bytes: u64,
}

impl FsReader {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl FileReader for FsReader {
    fn read(&self, path: &Path) -> Result<String, ReadError> {
        let meta = fs::metadata(path)?;
        if !meta.is_file() {
            return Err(ReadError::NotAFile);
        }
        if meta.len() > self.max_bytes {
            return Err(ReadError::TooLarge {
                size: meta.len(),
                limit: self.max_bytes,
            });
        }

        let bytes = fs::read(path)?;
        if looks_binary(&bytes) {
            return Err(ReadError::Binary);
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// NUL bytes or a high share of control characters in the first few KiB
pub fn looks_binary(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(SNIFF_BYTES)];
    if head.is_empty() {
        return false;
    }
    if head.contains(&0) {
        return true;
    }
    let control = head
        .iter()
        .filter(|&&b| b < 32 && !matches!(b, b'\n' | b'\r' | b'\t' | 0x0c))
        .count();
    control > head.len() / 10
}
