//! Loaded file contents and scroll position

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::render::{Highlighter, StyledLine};

/// Spaces a tab expands to
const TAB_WIDTH: usize = 4;

/// Immutable text of a loaded file, shared between the worker and the viewer
#[derive(Debug)]
struct FileText {
    lines: Vec<String>,
    /// Highlighted form, one entry per line; None renders plain
    styled: Option<Vec<StyledLine>>,
}

/// One loaded file
///
/// Built on the effect worker, so highlighting never runs on the event loop.
/// Cloning shares the text and copies only the scroll offset.
#[derive(Debug, Clone)]
pub struct ContentBuffer {
    path: PathBuf,
    text: Arc<FileText>,
    scroll: usize,
}

impl ContentBuffer {
    /// Split `content` into lines and run it through the highlighter
    pub fn new(path: &Path, content: &str, highlighter: &dyn Highlighter) -> Self {
        let content = content.replace('\t', &" ".repeat(TAB_WIDTH));
        let lines: Vec<String> = content.lines().map(String::from).collect();
        let styled = highlighter
            .highlight(&content, path)
            .filter(|styled| styled.len() == lines.len());

        Self {
            path: path.to_path_buf(),
            text: Arc::new(FileText { lines, styled }),
            scroll: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines(&self) -> &[String] {
        &self.text.lines
    }

    pub fn styled_lines(&self) -> Option<&[StyledLine]> {
        self.text.styled.as_deref()
    }

    pub fn line_count(&self) -> usize {
        self.text.lines.len()
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Largest offset that still fills a viewport of `rows`
    pub fn max_scroll(&self, rows: usize) -> usize {
        self.text.lines.len().saturating_sub(rows)
    }

    /// Move the offset by `delta` lines, clamped to the viewport
    pub fn scroll_by(&mut self, delta: isize, rows: usize) {
        let target = (self.scroll as isize).saturating_add(delta).max(0) as usize;
        self.scroll = target.min(self.max_scroll(rows));
    }

    /// Jump to an absolute offset, clamped to the viewport
    pub fn scroll_to(&mut self, offset: usize, rows: usize) {
        self.scroll = offset.min(self.max_scroll(rows));
    }

    /// Re-clamp after the viewport changed
    pub fn clamp(&mut self, rows: usize) {
        self.scroll = self.scroll.min(self.max_scroll(rows));
    }
}
