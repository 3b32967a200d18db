//! Syntax highlighting for the content pane

use std::path::Path;
use std::sync::{Arc, OnceLock};

use ratatui::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::theme::{StyleConfig, DEFAULT_THEME};

/// Lazy-initialized syntax set (100+ languages)
static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();

/// Lazy-initialized bundled themes
static THEME_SET: OnceLock<ThemeSet> = OnceLock::new();

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEME_SET.get_or_init(ThemeSet::load_defaults)
}

/// A segment of styled text (text with color)
#[derive(Debug, Clone, PartialEq)]
pub struct StyledSegment {
    pub text: String,
    pub color: Color,
}

/// A line with syntax highlighting
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    pub segments: Vec<StyledSegment>,
}

/// Turns raw text into colored lines
///
/// Runs on the effect worker thread, hence `Send + Sync`.
pub trait Highlighter: Send + Sync {
    /// One styled line per line of `content`, or None to show it plain
    fn highlight(&self, content: &str, path: &Path) -> Option<Vec<StyledLine>>;
}

/// Pick the highlighter the style settings ask for
pub fn highlighter_for(style: &StyleConfig) -> Arc<dyn Highlighter> {
    if style.highlight_enabled {
        Arc::new(SyntectHighlighter::new(&style.theme))
    } else {
        Arc::new(PlainHighlighter)
    }
}

/// Never highlights; used when highlighting is turned off
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, _content: &str, _path: &Path) -> Option<Vec<StyledLine>> {
        None
    }
}

/// syntect-backed highlighter
pub struct SyntectHighlighter {
    /// None only if syntect ships no themes at all
    theme: Option<&'static Theme>,
}

impl SyntectHighlighter {
    /// Use the named bundled theme, falling back to the default one
    pub fn new(theme_name: &str) -> Self {
        let themes = &theme_set().themes;
        let theme = themes.get(theme_name).or_else(|| {
            log::warn!("Unknown theme {:?}, using {}", theme_name, DEFAULT_THEME);
            themes.get(DEFAULT_THEME).or_else(|| themes.values().next())
        });
        Self { theme }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new(DEFAULT_THEME)
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, content: &str, path: &Path) -> Option<Vec<StyledLine>> {
        let theme = self.theme?;
        let ss = syntax_set();

        // Detect syntax from file extension or first line (shebang)
        let syntax = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| ss.find_syntax_by_extension(ext))
            .or_else(|| ss.find_syntax_by_first_line(content.lines().next().unwrap_or("")))?;

        let mut h = HighlightLines::new(syntax, theme);
        let mut styled_lines = Vec::new();

        for line in LinesWithEndings::from(content) {
            let ranges = match h.highlight_line(line, ss) {
                Ok(ranges) => ranges,
                Err(e) => {
                    log::debug!("Highlighting {} failed: {}", path.display(), e);
                    return None;
                }
            };
            let segments = ranges
                .iter()
                .map(|(style, text)| StyledSegment {
                    text: text.trim_end_matches(['\n', '\r']).to_string(),
                    color: Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b),
                })
                .filter(|segment| !segment.text.is_empty())
                .collect();
            styled_lines.push(StyledLine { segments });
        }

        Some(styled_lines)
    }
}
