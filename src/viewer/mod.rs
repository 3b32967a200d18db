//! Viewer module - loaded file content for the right-hand pane

pub mod buffer;
pub mod reader;
pub mod state;

pub use buffer::ContentBuffer;
pub use reader::{looks_binary, FileReader, FsReader, ReadError};
pub use state::{ContentViewer, ViewerContent};
