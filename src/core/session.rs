//! Session coordinator - routes messages to both panes and composes the frame

use std::path::Path;

use ratatui::Frame;

use super::{Effect, Message, PaneLayout, SessionState};
use crate::handler::key::{global_action, GlobalAction};
use crate::render::{render_content, render_help, render_tree, StyleConfig};
use crate::tree::{TreeNavigator, TreeOptions};
use crate::viewer::ContentViewer;

/// Root component owning the navigator, the viewer and the session state
pub struct Session {
    navigator: TreeNavigator,
    viewer: ContentViewer,
    state: SessionState,
    layout: PaneLayout,
    style: StyleConfig,
}

impl Session {
    /// Create a session rooted at `root`
    ///
    /// The returned effects must be run before the first frame is drawn.
    pub fn new(root: &Path, options: TreeOptions, style: StyleConfig) -> (Self, Vec<Effect>) {
        let (navigator, init) = TreeNavigator::new(root, options, &style);
        let viewer = ContentViewer::new(&style);
        let session = Self {
            navigator,
            viewer,
            state: SessionState::Idle,
            layout: PaneLayout::default(),
            style,
        };
        (session, vec![init])
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn navigator(&self) -> &TreeNavigator {
        &self.navigator
    }

    pub fn viewer(&self) -> &ContentViewer {
        &self.viewer
    }

    pub fn layout(&self) -> PaneLayout {
        self.layout
    }

    /// Process one message and collect the effects it produced
    ///
    /// The navigator sees the message first, then the global bindings, then
    /// the viewer.
    pub fn update(&mut self, msg: &Message) -> Vec<Effect> {
        let mut effects = self.navigator.handle_event(msg);

        match msg {
            Message::Resize { width, height } => self.resize(*width, *height),
            Message::Key(key) => match global_action(key) {
                Some(GlobalAction::Quit) => effects.push(Effect::Quit),
                Some(GlobalAction::OpenFile) => effects.extend(self.open_selected()),
                None => {}
            },
            _ => {}
        }

        effects.extend(self.viewer.handle_event(msg));
        effects
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.layout = PaneLayout::new(width, height);
        let (pane_width, pane_height) = self.layout.pane_size();
        self.navigator.set_size(pane_width, pane_height);
        self.viewer.set_size(pane_width, pane_height);
    }

    /// Load the selection into the viewer if it is a file
    fn open_selected(&mut self) -> Option<Effect> {
        let selected = self.navigator.selected_item()?;
        if selected.is_dir() {
            return None;
        }
        let path = selected.path.clone();
        self.viewer.goto_top();
        let effect = self.viewer.set_file_name(&path);
        if self.state != SessionState::ShowingContent {
            log::debug!("Session: {:?} -> ShowingContent", self.state);
        }
        self.state = SessionState::ShowingContent;
        Some(effect)
    }

    /// Draw both panes side by side
    pub fn render(&self, frame: &mut Frame) {
        let (left, right) = PaneLayout::split(frame.area());
        render_tree(frame, &self.navigator, &self.style, left);
        match self.state {
            SessionState::Idle => render_help(frame, &self.style, right),
            SessionState::ShowingContent => {
                render_content(frame, &self.viewer, &self.style, right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::DirEntry;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn style() -> StyleConfig {
        StyleConfig {
            highlight_enabled: false,
            ..StyleConfig::default()
        }
    }

    fn key(code: KeyCode) -> Message {
        Message::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl_c() -> Message {
        Message::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
    }

    /// Session over a fake root `/r` containing `a.txt` and `sub/`
    fn session() -> Session {
        let (mut session, effects) = Session::new(Path::new("/r"), TreeOptions::default(), style());
        let Some(Effect::ListDirectory { id, path }) = effects.first().cloned() else {
            panic!("expected a root listing, got {:?}", effects);
        };
        session.update(&Message::DirectoryListed {
            id,
            path,
            result: Ok(vec![DirEntry::new("a.txt", false), DirEntry::new("sub", true)]),
        });
        session.update(&Message::Resize {
            width: 80,
            height: 24,
        });
        session
    }

    #[test]
    fn test_starts_idle_with_root_listing() {
        let (session, effects) = Session::new(Path::new("/r"), TreeOptions::default(), style());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(effects.len(), 1);
        assert!(matches!(&effects[0], Effect::ListDirectory { path, .. } if path == Path::new("/r")));
    }

    #[test]
    fn test_open_file_requests_read_and_switches_state() {
        let mut s = session();
        s.update(&key(KeyCode::Down));
        let effects = s.update(&key(KeyCode::Char('p')));
        assert_eq!(s.state(), SessionState::ShowingContent);
        assert!(matches!(
            effects.as_slice(),
            [Effect::ReadFile { path, .. }] if path == Path::new("/r/a.txt")
        ));
    }

    #[test]
    fn test_open_directory_is_noop() {
        let mut s = session();
        s.update(&key(KeyCode::Down));
        s.update(&key(KeyCode::Down));
        let effects = s.update(&key(KeyCode::Char('p')));
        assert!(effects.is_empty());
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_open_on_root_is_noop() {
        let mut s = session();
        let effects = s.update(&key(KeyCode::Char('p')));
        assert!(effects.is_empty());
        assert_eq!(s.state(), SessionState::Idle);
    }

    #[test]
    fn test_quit_in_any_state() {
        let mut s = session();
        assert_eq!(s.update(&ctrl_c()), vec![Effect::Quit]);

        s.update(&key(KeyCode::Down));
        s.update(&key(KeyCode::Char('p')));
        assert_eq!(s.state(), SessionState::ShowingContent);
        assert!(s.update(&ctrl_c()).contains(&Effect::Quit));
    }

    #[test]
    fn test_resize_gives_each_pane_half_width() {
        let mut s = session();
        s.update(&Message::Resize {
            width: 81,
            height: 30,
        });
        assert_eq!(s.navigator().size(), (40, 30));
        assert_eq!(s.viewer().size(), (40, 30));
        assert_eq!(s.layout(), PaneLayout::new(81, 30));
    }

    #[test]
    fn test_unrelated_keys_leave_state_alone() {
        let mut s = session();
        let effects = s.update(&key(KeyCode::Char('z')));
        assert!(effects.is_empty());
        assert_eq!(s.state(), SessionState::Idle);
        assert_eq!(s.navigator().cursor(), Some(0));
    }
}
