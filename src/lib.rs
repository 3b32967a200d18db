//! splitview - a two-pane terminal file browser
//!
//! A directory tree on the left and the selected file, syntax highlighted,
//! on the right. Both panes are independent state machines fed by one
//! message stream; disk access happens off the event loop.

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod render;
pub mod tree;
pub mod viewer;
pub mod watcher;
