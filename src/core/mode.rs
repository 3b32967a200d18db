//! Session state and pane geometry

use ratatui::layout::Rect;

/// What the right-hand pane is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing opened yet; the right pane shows the key bindings
    #[default]
    Idle,
    /// A file has been opened into the content pane
    ShowingContent,
}

/// Geometry of the two panes for a terminal size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneLayout {
    pub width: u16,
    pub height: u16,
}

impl PaneLayout {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size handed to each pane: half the width, the full height
    pub fn pane_size(&self) -> (u16, u16) {
        (self.width / 2, self.height)
    }

    /// Drawing areas for (tree, content); the content pane takes the odd column
    pub fn split(area: Rect) -> (Rect, Rect) {
        let left_width = area.width / 2;
        let left = Rect::new(area.x, area.y, left_width, area.height);
        let right = Rect::new(
            area.x + left_width,
            area.y,
            area.width - left_width,
            area.height,
        );
        (left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(SessionState::default(), SessionState::Idle);
    }

    #[test]
    fn test_pane_size_is_half_width_full_height() {
        assert_eq!(PaneLayout::new(81, 24).pane_size(), (40, 24));
        assert_eq!(PaneLayout::new(1, 1).pane_size(), (0, 1));
        assert_eq!(PaneLayout::new(0, 0).pane_size(), (0, 0));
    }

    #[test]
    fn test_split_covers_full_width() {
        let (left, right) = PaneLayout::split(Rect::new(0, 0, 81, 24));
        assert_eq!(left.width, 40);
        assert_eq!(right.width, 41);
        assert_eq!(right.x, 40);
        assert_eq!(left.width + right.width, 81);
        assert_eq!(left.height, 24);

        let (left, right) = PaneLayout::split(Rect::new(0, 0, 0, 0));
        assert_eq!((left.width, right.width), (0, 0));
    }
}
