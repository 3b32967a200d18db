//! Tree module - File tree data structure and navigation

pub mod listing;
pub mod navigator;
pub mod node;

pub use listing::{DirEntry, DirectoryLister, FsLister};
pub use navigator::{TreeNavigator, TreeOptions};
pub use node::{NodeKind, TreeNode};
