//! Content viewer - the file shown in the right pane and its scroll offset

use std::path::{Path, PathBuf};

use super::{ContentBuffer, ReadError};
use crate::core::{Effect, Message, RequestId, RequestIds};
use crate::handler::key::{scroll_action, ScrollAction};
use crate::render::StyleConfig;

/// What the content pane currently holds
#[derive(Debug, Clone)]
pub enum ViewerContent {
    /// Nothing requested yet
    Empty,
    /// Waiting for the read of this file
    Loading(PathBuf),
    /// File loaded
    Loaded(ContentBuffer),
    /// The read failed; `message` is shown in the pane
    Failed { path: PathBuf, message: String },
}

/// Owns the loaded file and the scroll position
pub struct ContentViewer {
    content: ViewerContent,
    /// Only the completion carrying this id is accepted
    pending: Option<RequestId>,
    ids: RequestIds,
    width: u16,
    height: u16,
    border_rows: u16,
}

impl ContentViewer {
    pub fn new(style: &StyleConfig) -> Self {
        Self {
            content: ViewerContent::Empty,
            pending: None,
            ids: RequestIds::new(),
            width: 0,
            height: 0,
            border_rows: style.border_rows(),
        }
    }

    pub fn content(&self) -> &ViewerContent {
        &self.content
    }

    /// The loaded buffer, if the last read succeeded
    pub fn buffer(&self) -> Option<&ContentBuffer> {
        match &self.content {
            ViewerContent::Loaded(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Current scroll offset (0 when nothing is loaded)
    pub fn scroll(&self) -> usize {
        self.buffer().map(|b| b.scroll()).unwrap_or(0)
    }

    /// Path of the file shown or being loaded
    pub fn path(&self) -> Option<&Path> {
        match &self.content {
            ViewerContent::Empty => None,
            ViewerContent::Loading(path) | ViewerContent::Failed { path, .. } => Some(path),
            ViewerContent::Loaded(buffer) => Some(buffer.path()),
        }
    }

    /// Request `path`; any read still in flight is superseded
    pub fn set_file_name(&mut self, path: &Path) -> Effect {
        let id = self.ids.next_id();
        self.pending = Some(id);
        self.content = ViewerContent::Loading(path.to_path_buf());
        log::debug!("Loading {} ({:?})", path.display(), id);
        Effect::ReadFile {
            id,
            path: path.to_path_buf(),
        }
    }

    /// Scroll back to the first line
    pub fn goto_top(&mut self) {
        if let ViewerContent::Loaded(buffer) = &mut self.content {
            buffer.scroll_to(0, 0);
        }
    }

    /// Set the pane size and re-clamp the scroll offset
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let rows = self.page_height();
        if let ViewerContent::Loaded(buffer) = &mut self.content {
            buffer.clamp(rows);
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Text rows inside the pane
    pub fn page_height(&self) -> usize {
        self.height.saturating_sub(self.border_rows) as usize
    }

    /// React to a message; unrelated messages are ignored
    pub fn handle_event(&mut self, msg: &Message) -> Vec<Effect> {
        match msg {
            Message::Key(key) => {
                if let Some(action) = scroll_action(key) {
                    self.apply(action);
                }
            }
            Message::FileRead { id, path, result } => self.apply_read(*id, path, result),
            Message::FilesChanged(paths) => {
                return self.reload_if_changed(paths).into_iter().collect();
            }
            _ => {}
        }
        Vec::new()
    }

    /// Re-read the shown file if it is among `paths`
    ///
    /// The old content stays on screen until the new read lands, and the
    /// scroll offset survives the reload.
    fn reload_if_changed(&mut self, paths: &[PathBuf]) -> Option<Effect> {
        let path = match &self.content {
            ViewerContent::Loaded(buffer) => buffer.path(),
            ViewerContent::Failed { path, .. } => path.as_path(),
            ViewerContent::Empty | ViewerContent::Loading(_) => return None,
        };
        if !paths.iter().any(|changed| changed == path) {
            return None;
        }
        let path = path.to_path_buf();
        let id = self.ids.next_id();
        self.pending = Some(id);
        log::debug!("Reloading {} ({:?})", path.display(), id);
        Some(Effect::ReadFile { id, path })
    }

    fn apply(&mut self, action: ScrollAction) {
        let rows = self.page_height();
        let page = rows.max(1) as isize;
        let ViewerContent::Loaded(buffer) = &mut self.content else {
            return;
        };
        match action {
            ScrollAction::LineUp => buffer.scroll_by(-1, rows),
            ScrollAction::LineDown => buffer.scroll_by(1, rows),
            ScrollAction::PageUp => buffer.scroll_by(-page, rows),
            ScrollAction::PageDown => buffer.scroll_by(page, rows),
            ScrollAction::Top => buffer.scroll_to(0, rows),
            ScrollAction::Bottom => buffer.scroll_to(usize::MAX, rows),
        }
    }

    fn apply_read(
        &mut self,
        id: RequestId,
        path: &Path,
        result: &Result<ContentBuffer, ReadError>,
    ) {
        if self.pending != Some(id) {
            log::debug!("Discarding stale read of {}", path.display());
            return;
        }
        self.pending = None;

        self.content = match result {
            Ok(buffer) => {
                // A reload of the shown file keeps its place
                let scroll = match &self.content {
                    ViewerContent::Loaded(old) if old.path() == path => old.scroll(),
                    _ => 0,
                };
                let mut buffer = buffer.clone();
                buffer.scroll_to(scroll, self.page_height());
                ViewerContent::Loaded(buffer)
            }
            Err(e) => {
                log::warn!("Cannot show {}: {}", path.display(), e);
                ViewerContent::Failed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
            }
        };
    }
}
