//! Tree navigator - directory hierarchy, cursor and expand/collapse state
//!
//! The navigator never touches the disk. Listing a directory is requested as
//! an [`Effect::ListDirectory`] and the answer comes back later as a
//! [`Message::DirectoryListed`].

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use super::{DirEntry, NodeKind, TreeNode};
use crate::core::{Effect, Message, RequestId, RequestIds};
use crate::handler::key::{tree_action, TreeAction};
use crate::render::StyleConfig;

/// Listing options for the navigator
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeOptions {
    pub show_hidden: bool,
    pub dirs_first: bool,
}

/// Manages file tree navigation
pub struct TreeNavigator {
    root_path: PathBuf,
    /// None once the root listing has failed
    root: Option<TreeNode>,
    options: TreeOptions,
    /// Index into the visible entries
    cursor: usize,
    /// First visible row
    offset: usize,
    width: u16,
    height: u16,
    border_rows: u16,
    /// Latest request per directory; older answers are stale
    pending: HashMap<PathBuf, RequestId>,
    ids: RequestIds,
    error: Option<String>,
}

impl TreeNavigator {
    /// Create a navigator rooted at `root_path` plus the listing of the root
    pub fn new(root_path: &Path, options: TreeOptions, style: &StyleConfig) -> (Self, Effect) {
        let mut root = TreeNode::new(root_path.to_path_buf(), NodeKind::Directory, 0);
        root.set_expanded(true);

        let mut navigator = Self {
            root_path: root_path.to_path_buf(),
            root: Some(root),
            options,
            cursor: 0,
            offset: 0,
            width: 0,
            height: 0,
            border_rows: style.border_rows(),
            pending: HashMap::new(),
            ids: RequestIds::new(),
            error: None,
        };
        let effect = navigator.request_listing(root_path.to_path_buf());
        (navigator, effect)
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    /// Error shown in place of the tree when the root could not be listed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn show_hidden(&self) -> bool {
        self.options.show_hidden
    }

    /// Flatten the tree into the list of visible entries
    pub fn visible_entries(&self) -> Vec<&TreeNode> {
        let mut entries = Vec::new();
        if let Some(root) = &self.root {
            root.collect_visible(&mut entries);
        }
        entries
    }

    pub fn visible_count(&self) -> usize {
        self.visible_entries().len()
    }

    /// Cursor index into the visible entries, None for an empty tree
    pub fn cursor(&self) -> Option<usize> {
        (self.visible_count() > 0).then_some(self.cursor)
    }

    /// First visible row of the pane
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The node under the cursor, None when the tree is empty
    pub fn selected_item(&self) -> Option<&TreeNode> {
        self.visible_entries().get(self.cursor).copied()
    }

    /// Whether a listing for `path` is still outstanding
    pub fn is_loading(&self, path: &Path) -> bool {
        self.pending.contains_key(path)
    }

    /// Set the pane size used for paging and scrolling
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.adjust_offset();
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Number of entry rows that fit in the pane
    pub fn page_height(&self) -> usize {
        self.height.saturating_sub(self.border_rows) as usize
    }

    /// React to a message; unrelated messages are ignored
    pub fn handle_event(&mut self, msg: &Message) -> Vec<Effect> {
        match msg {
            Message::Key(key) => match tree_action(key) {
                Some(action) => self.apply(action),
                None => Vec::new(),
            },
            Message::DirectoryListed { id, path, result } => {
                self.apply_listing(*id, path, result);
                Vec::new()
            }
            Message::FilesChanged(paths) => self.refresh_changed(paths),
            _ => Vec::new(),
        }
    }

    fn apply(&mut self, action: TreeAction) -> Vec<Effect> {
        let page = self.page_height().max(1);
        match action {
            TreeAction::MoveUp => self.move_cursor(-1),
            TreeAction::MoveDown => self.move_cursor(1),
            TreeAction::PageUp => self.move_cursor(-(page as isize)),
            TreeAction::PageDown => self.move_cursor(page as isize),
            TreeAction::MoveToTop => self.move_cursor(isize::MIN),
            TreeAction::MoveToBottom => self.move_cursor(isize::MAX),
            TreeAction::Expand => return self.expand_selected(),
            TreeAction::Collapse => self.collapse_selected(),
            TreeAction::ToggleExpand => {
                let expanded = self.selected_item().is_some_and(|n| n.is_expanded());
                if expanded {
                    self.collapse_selected();
                } else {
                    return self.expand_selected();
                }
            }
            TreeAction::ToggleHidden => {
                self.options.show_hidden = !self.options.show_hidden;
                log::debug!("Hidden files shown: {}", self.options.show_hidden);
                return self.refresh();
            }
            TreeAction::Refresh => return self.refresh(),
        }
        Vec::new()
    }

    fn move_cursor(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let target = (self.cursor as isize).saturating_add(delta);
        self.cursor = target.clamp(0, count as isize - 1) as usize;
        self.adjust_offset();
    }

    /// Keep the cursor inside the viewport
    fn adjust_offset(&mut self) {
        let page = self.page_height().max(1);
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + page {
            self.offset = self.cursor + 1 - page;
        }
        let max_offset = self.visible_count().saturating_sub(page);
        self.offset = self.offset.min(max_offset);
    }

    fn expand_selected(&mut self) -> Vec<Effect> {
        let Some(node) = self.selected_item() else {
            return Vec::new();
        };
        if !node.is_dir() {
            return Vec::new();
        }
        let path = node.path.clone();
        let needs_listing = !node.is_loaded() && !self.pending.contains_key(&path);

        if let Some(node) = self.find_mut(&path) {
            node.set_expanded(true);
        }
        if needs_listing {
            vec![self.request_listing(path)]
        } else {
            Vec::new()
        }
    }

    /// Collapse the selected directory, or the directory containing the selection
    fn collapse_selected(&mut self) {
        let Some(node) = self.selected_item() else {
            return;
        };
        let target = if node.is_dir() && node.is_expanded() {
            node.path.clone()
        } else {
            match node.path.parent() {
                Some(parent) if node.depth > 0 => parent.to_path_buf(),
                _ => return,
            }
        };
        self.collapse(&target);
    }

    /// Collapse the directory at `path`; a cursor inside it moves onto it
    pub fn collapse(&mut self, path: &Path) {
        let selected = self.selected_item().map(|n| n.path.clone());
        match self.find_mut(path) {
            Some(node) if node.is_dir() => node.set_expanded(false),
            _ => return,
        }
        self.relocate_cursor(selected.as_deref());
    }

    /// Re-list every directory that is listed or expanded
    fn refresh(&mut self) -> Vec<Effect> {
        let mut dirs = Vec::new();
        match &self.root {
            Some(root) => root.open_dirs(&mut dirs),
            None => {
                // The root failed before; try it again
                self.error = None;
                let mut root = TreeNode::new(self.root_path.clone(), NodeKind::Directory, 0);
                root.set_expanded(true);
                self.root = Some(root);
                dirs.push(self.root_path.clone());
            }
        }
        if dirs.is_empty() {
            dirs.push(self.root_path.clone());
        }
        dirs.into_iter()
            .map(|dir| self.request_listing(dir))
            .collect()
    }

    /// Re-list the listed directories touched by a filesystem change
    fn refresh_changed(&mut self, paths: &[PathBuf]) -> Vec<Effect> {
        let Some(root) = &self.root else {
            return Vec::new();
        };
        let mut loaded = Vec::new();
        root.open_dirs(&mut loaded);
        let loaded: HashSet<PathBuf> = loaded.into_iter().collect();

        let mut targets = Vec::new();
        for path in paths {
            for candidate in [Some(path.as_path()), path.parent()].into_iter().flatten() {
                if loaded.contains(candidate) && !targets.iter().any(|t: &PathBuf| t == candidate)
                {
                    targets.push(candidate.to_path_buf());
                }
            }
        }
        targets
            .into_iter()
            .map(|dir| self.request_listing(dir))
            .collect()
    }

    fn request_listing(&mut self, path: PathBuf) -> Effect {
        let id = self.ids.next_id();
        self.pending.insert(path.clone(), id);
        Effect::ListDirectory { id, path }
    }

    fn apply_listing(
        &mut self,
        id: RequestId,
        path: &Path,
        result: &std::io::Result<Vec<DirEntry>>,
    ) {
        if self.pending.get(path) != Some(&id) {
            log::debug!("Discarding stale listing of {}", path.display());
            return;
        }
        self.pending.remove(path);
        let selected = self.selected_item().map(|n| n.path.clone());

        match result {
            Ok(entries) => {
                let children = self.build_children(path, entries);
                if let Some(node) = self.find_mut(path) {
                    node.set_children(children);
                }
            }
            Err(e) if path == self.root_path => {
                log::warn!("Cannot list root {}: {}", path.display(), e);
                self.root = None;
                self.pending.clear();
                self.error = Some(format!("Cannot read {}: {}", path.display(), e));
            }
            Err(e) => {
                log::warn!("Cannot list {}: {}", path.display(), e);
                let reason = match e.kind() {
                    std::io::ErrorKind::Other => e.to_string(),
                    kind => kind.to_string(),
                };
                if let Some(node) = self.find_mut(path) {
                    node.set_failed(reason);
                }
            }
        }
        self.relocate_cursor(selected.as_deref());
    }

    /// Turn raw entries into sorted, filtered child nodes of `parent`
    fn build_children(&self, parent: &Path, entries: &[DirEntry]) -> Vec<TreeNode> {
        let depth = self.find(parent).map(|n| n.depth + 1).unwrap_or(1);
        let mut entries: Vec<&DirEntry> = entries
            .iter()
            .filter(|e| self.options.show_hidden || !e.name.starts_with('.'))
            .collect();

        let dirs_first = self.options.dirs_first;
        entries.sort_by(|a, b| {
            let by_kind = if dirs_first {
                b.is_dir.cmp(&a.is_dir)
            } else {
                std::cmp::Ordering::Equal
            };
            by_kind
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        });

        entries
            .into_iter()
            .map(|e| {
                let kind = if e.is_dir {
                    NodeKind::Directory
                } else {
                    NodeKind::File
                };
                TreeNode::new(parent.join(&e.name), kind, depth)
            })
            .collect()
    }

    /// Point the cursor at `previous`, or its nearest visible ancestor
    fn relocate_cursor(&mut self, previous: Option<&Path>) {
        let visible: Vec<PathBuf> = self
            .visible_entries()
            .iter()
            .map(|n| n.path.clone())
            .collect();

        let found = previous.and_then(|prev| {
            prev.ancestors()
                .find_map(|candidate| visible.iter().position(|p| p == candidate))
        });
        self.cursor = match found {
            Some(index) => index,
            None => self.cursor.min(visible.len().saturating_sub(1)),
        };
        self.adjust_offset();
    }

    fn find(&self, path: &Path) -> Option<&TreeNode> {
        self.root.as_ref().and_then(|root| root.find(path))
    }

    fn find_mut(&mut self, path: &Path) -> Option<&mut TreeNode> {
        self.root.as_mut().and_then(|root| root.find_mut(path))
    }
}
