//! Directory listing provider

use std::fs;
use std::io;
use std::path::Path;

/// One raw entry returned by a lister
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Self {
            name: name.into(),
            is_dir,
        }
    }
}

/// Source of directory entries
pub trait DirectoryLister: Send + Sync {
    /// List the entries of `path` in no particular order
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>>;
}

/// Lists the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            // Entries that vanish or can't be stat'ed mid-listing are skipped
            let Ok(entry) = entry else { continue };
            // Follow symlinks so a link to a directory can be expanded
            let is_dir = match fs::metadata(entry.path()) {
                Ok(meta) => meta.is_dir(),
                Err(_) => entry.file_type().map(|t| t.is_dir()).unwrap_or(false),
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(entries)
    }
}
