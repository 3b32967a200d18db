//! Render module - UI rendering

pub mod common;
pub mod content;
pub mod highlight;
pub mod theme;
pub mod tree;

pub use content::{render_content, render_help};
pub use highlight::{
    highlighter_for, Highlighter, PlainHighlighter, StyledLine, StyledSegment, SyntectHighlighter,
};
pub use theme::{parse_color, StyleConfig, DEFAULT_THEME};
pub use tree::render_tree;
