//! Common helpers shared by the panes

use ratatui::widgets::{Block, Borders};

use super::StyleConfig;

/// Pane frame: a bordered, titled block, or a bare block when borders are off
pub fn pane_block<'a>(style: &StyleConfig, title: &str) -> Block<'a> {
    if !style.border_enabled {
        return Block::default();
    }
    let block = Block::default().borders(Borders::ALL);
    if title.is_empty() {
        block
    } else {
        block.title(format!(" {} ", title))
    }
}
