//! Tree node definition

use std::path::{Path, PathBuf};

/// Whether a node is a file or a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Directory,
}

/// A single entry in the file tree
#[derive(Debug, Clone)]
pub struct TreeNode {
    /// Full path to the entry
    pub path: PathBuf,
    /// Display name
    pub name: String,
    /// File or directory
    pub kind: NodeKind,
    /// Depth in the tree (0 = root)
    pub depth: usize,
    expanded: bool,
    loaded: bool,
    /// Why the last listing failed, shown next to the name
    error: Option<String>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a new node; nothing is read from disk
    pub fn new(path: PathBuf, kind: NodeKind, depth: usize) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            path,
            name,
            kind,
            depth,
            expanded: false,
            loaded: false,
            error: None,
            children: Vec::new(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Whether the children have been listed at least once
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Set expanded state (no-op on files)
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.is_dir() {
            self.expanded = expanded;
        }
    }

    /// Replace the children with a fresh listing (no-op on files)
    ///
    /// Children that survive keep their own expanded state and subtree, so a
    /// refresh does not fold the user's view.
    pub fn set_children(&mut self, mut children: Vec<TreeNode>) {
        if !self.is_dir() {
            return;
        }
        let mut previous = std::mem::take(&mut self.children);
        for child in &mut children {
            if let Some(pos) = previous
                .iter()
                .position(|old| old.path == child.path && old.kind == child.kind)
            {
                *child = previous.swap_remove(pos);
            }
        }
        self.children = children;
        self.loaded = true;
        self.error = None;
    }

    /// Record a failed listing: the node folds and is listed again next time
    pub fn set_failed(&mut self, reason: String) {
        self.children.clear();
        self.loaded = false;
        self.expanded = false;
        self.error = Some(reason);
    }

    /// Find a node by path in this subtree
    pub fn find(&self, path: &Path) -> Option<&TreeNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter().find_map(|child| child.find(path))
    }

    /// Find a node by path in this subtree (mutable)
    pub fn find_mut(&mut self, path: &Path) -> Option<&mut TreeNode> {
        if self.path == path {
            return Some(self);
        }
        if !path.starts_with(&self.path) {
            return None;
        }
        self.children.iter_mut().find_map(|child| child.find_mut(path))
    }

    /// Collect nodes depth-first, descending only into expanded directories
    pub fn collect_visible<'a>(&'a self, out: &mut Vec<&'a TreeNode>) {
        out.push(self);
        if self.expanded {
            for child in &self.children {
                child.collect_visible(out);
            }
        }
    }

    /// Paths of every directory in this subtree that is listed or expanded
    pub fn open_dirs(&self, out: &mut Vec<PathBuf>) {
        if self.loaded || self.expanded {
            out.push(self.path.clone());
            for child in &self.children {
                child.open_dirs(out);
            }
        }
    }
}
