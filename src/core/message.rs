//! Messages flowing into the components and effects flowing out of them

use std::path::PathBuf;

use crossterm::event::KeyEvent;

use crate::tree::DirEntry;
use crate::viewer::{ContentBuffer, ReadError};

/// Tag attached to an asynchronous request so late completions can be matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// Monotonic source of request ids, one per component
#[derive(Debug, Default)]
pub struct RequestIds {
    next: u64,
}

impl RequestIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> RequestId {
        self.next += 1;
        RequestId(self.next)
    }
}

/// Everything the components react to: user input, layout, and completions
#[derive(Debug)]
pub enum Message {
    /// Key press from the terminal
    Key(KeyEvent),
    /// Terminal resized to the given size
    Resize { width: u16, height: u16 },
    /// A directory listing finished
    DirectoryListed {
        id: RequestId,
        path: PathBuf,
        result: std::io::Result<Vec<DirEntry>>,
    },
    /// A file read finished; the buffer arrives already highlighted
    FileRead {
        id: RequestId,
        path: PathBuf,
        result: Result<ContentBuffer, ReadError>,
    },
    /// The watcher saw changes at these paths
    FilesChanged(Vec<PathBuf>),
}

/// Deferred work requested by a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// List a directory, answered by `Message::DirectoryListed`
    ListDirectory { id: RequestId, path: PathBuf },
    /// Read a file, answered by `Message::FileRead`
    ReadFile { id: RequestId, path: PathBuf },
    /// Leave the program
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique_and_increasing() {
        let mut ids = RequestIds::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
