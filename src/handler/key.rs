//! Keyboard bindings
//!
//! Each component gets its own keymap. Every key event reaches both panes, so
//! the tree and content keymaps are kept disjoint: a key means one thing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Session-wide bindings checked by the coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Leave the program (Ctrl+C)
    Quit,
    /// Load the selected file into the content pane (p)
    OpenFile,
}

/// Tree pane bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveToTop,
    MoveToBottom,
    /// Expand the directory under the cursor
    Expand,
    /// Collapse the directory under the cursor, or its parent
    Collapse,
    /// Expand or collapse the directory under the cursor
    ToggleExpand,
    ToggleHidden,
    Refresh,
}

/// Content pane bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

fn has_ctrl(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_shift(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::SHIFT)
}

/// Map a key to a session-wide action
pub fn global_action(key: &KeyEvent) -> Option<GlobalAction> {
    match key.code {
        KeyCode::Char('c') if has_ctrl(key) => Some(GlobalAction::Quit),
        KeyCode::Char('p') if !has_ctrl(key) => Some(GlobalAction::OpenFile),
        _ => None,
    }
}

/// Map a key to a tree pane action
pub fn tree_action(key: &KeyEvent) -> Option<TreeAction> {
    if has_ctrl(key) || key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    let action = match key.code {
        KeyCode::Up if !has_shift(key) => TreeAction::MoveUp,
        KeyCode::Down if !has_shift(key) => TreeAction::MoveDown,
        KeyCode::Char('k') => TreeAction::MoveUp,
        KeyCode::Char('j') => TreeAction::MoveDown,
        KeyCode::PageUp => TreeAction::PageUp,
        KeyCode::PageDown => TreeAction::PageDown,
        KeyCode::Char('g') => TreeAction::MoveToTop,
        KeyCode::Char('G') => TreeAction::MoveToBottom,
        KeyCode::Right | KeyCode::Char('l') => TreeAction::Expand,
        KeyCode::Left | KeyCode::Char('h') => TreeAction::Collapse,
        KeyCode::Enter => TreeAction::ToggleExpand,
        KeyCode::Char('.') => TreeAction::ToggleHidden,
        KeyCode::Char('R') | KeyCode::F(5) => TreeAction::Refresh,
        _ => return None,
    };
    Some(action)
}

/// Map a key to a content pane action
pub fn scroll_action(key: &KeyEvent) -> Option<ScrollAction> {
    let action = match key.code {
        KeyCode::Up if has_shift(key) => ScrollAction::LineUp,
        KeyCode::Down if has_shift(key) => ScrollAction::LineDown,
        KeyCode::Char('K') => ScrollAction::LineUp,
        KeyCode::Char('J') => ScrollAction::LineDown,
        KeyCode::Char('b') if has_ctrl(key) => ScrollAction::PageUp,
        KeyCode::Char('f') if has_ctrl(key) => ScrollAction::PageDown,
        KeyCode::Home => ScrollAction::Top,
        KeyCode::End => ScrollAction::Bottom,
        _ => return None,
    };
    Some(action)
}

/// Key binding summary shown before a file is opened
pub const HELP_LINES: &[(&str, &str)] = &[
    ("j/k ↑/↓", "Move cursor"),
    ("PgUp/PgDn", "Page tree"),
    ("g/G", "Tree top / bottom"),
    ("l/→", "Expand directory"),
    ("h/←", "Collapse directory"),
    ("Enter", "Toggle directory"),
    (".", "Toggle hidden files"),
    ("R", "Refresh tree"),
    ("p", "Open file"),
    ("J/K", "Scroll file"),
    ("Ctrl+f/b", "Page file"),
    ("Home/End", "File top / bottom"),
    ("Ctrl+c", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_global_bindings() {
        assert_eq!(
            global_action(&key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(GlobalAction::Quit)
        );
        assert_eq!(
            global_action(&key(KeyCode::Char('p'))),
            Some(GlobalAction::OpenFile)
        );
        assert_eq!(global_action(&key(KeyCode::Char('c'))), None);
        assert_eq!(
            global_action(&key_with(KeyCode::Char('p'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_tree_bindings() {
        assert_eq!(tree_action(&key(KeyCode::Down)), Some(TreeAction::MoveDown));
        assert_eq!(tree_action(&key(KeyCode::Char('k'))), Some(TreeAction::MoveUp));
        assert_eq!(
            tree_action(&key(KeyCode::Enter)),
            Some(TreeAction::ToggleExpand)
        );
        assert_eq!(tree_action(&key(KeyCode::Left)), Some(TreeAction::Collapse));
        assert_eq!(
            tree_action(&key(KeyCode::Char('.'))),
            Some(TreeAction::ToggleHidden)
        );
        assert_eq!(
            tree_action(&key_with(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_scroll_bindings() {
        assert_eq!(
            scroll_action(&key_with(KeyCode::Char('J'), KeyModifiers::SHIFT)),
            Some(ScrollAction::LineDown)
        );
        assert_eq!(
            scroll_action(&key_with(KeyCode::Char('f'), KeyModifiers::CONTROL)),
            Some(ScrollAction::PageDown)
        );
        assert_eq!(scroll_action(&key(KeyCode::End)), Some(ScrollAction::Bottom));
        assert_eq!(scroll_action(&key(KeyCode::Char('f'))), None);
    }

    #[test]
    fn test_tree_and_scroll_keymaps_are_disjoint() {
        let keys = [
            key(KeyCode::Up),
            key(KeyCode::Down),
            key_with(KeyCode::Up, KeyModifiers::SHIFT),
            key_with(KeyCode::Down, KeyModifiers::SHIFT),
            key(KeyCode::Char('j')),
            key_with(KeyCode::Char('J'), KeyModifiers::SHIFT),
            key(KeyCode::PageDown),
            key_with(KeyCode::Char('f'), KeyModifiers::CONTROL),
            key(KeyCode::Home),
            key(KeyCode::Char('g')),
            key(KeyCode::Char('p')),
        ];
        for k in keys {
            assert!(
                !(tree_action(&k).is_some() && scroll_action(&k).is_some()),
                "{:?} is bound in both panes",
                k
            );
        }
    }
}
