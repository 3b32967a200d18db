//! Pane styling shared by the tree and content panes
//!
//! Built once from the `[style]` section of the config file and handed to
//! both panes by reference.

use ratatui::style::Color;

use crate::app::StyleSection;

/// Resolved style options for both panes
#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    /// Background of the cursor row in the tree
    pub cursor_color: Color,
    /// Foreground of directory entries
    pub directory_color: Color,
    /// Foreground of file entries
    pub file_color: Color,
    /// Draw borders around the panes
    pub border_enabled: bool,
    /// Run the syntax highlighter on loaded files
    pub highlight_enabled: bool,
    /// Show line numbers in the content pane
    pub line_numbers: bool,
    /// syntect theme name
    pub theme: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            cursor_color: Color::Indexed(63),
            directory_color: Color::Indexed(63),
            file_color: Color::Reset,
            border_enabled: true,
            highlight_enabled: true,
            line_numbers: true,
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

/// syntect theme used when none is configured
pub const DEFAULT_THEME: &str = "base16-ocean.dark";

impl StyleConfig {
    /// Resolve the config file section, falling back to defaults for bad colors
    pub fn from_section(section: &StyleSection, line_numbers: bool) -> Self {
        let defaults = Self::default();
        Self {
            cursor_color: color_or(&section.cursor_color, "cursor_color", defaults.cursor_color),
            directory_color: color_or(
                &section.directory_color,
                "directory_color",
                defaults.directory_color,
            ),
            file_color: color_or(&section.file_color, "file_color", defaults.file_color),
            border_enabled: section.border_enabled,
            highlight_enabled: section.highlight_enabled,
            line_numbers,
            theme: section.theme.clone(),
        }
    }

    /// Rows taken by the top and bottom border
    pub fn border_rows(&self) -> u16 {
        if self.border_enabled {
            2
        } else {
            0
        }
    }
}

fn color_or(value: &str, key: &str, fallback: Color) -> Color {
    match parse_color(value) {
        Some(color) => color,
        None => {
            log::warn!("Ignoring invalid style.{} = {:?}", key, value);
            fallback
        }
    }
}

/// Parse a color string: named, `#rgb`, `#rrggbb`, `rgb(r, g, b)`, or a 0-255 index
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if s == "default" || s == "reset" {
        return Some(Color::Reset);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex_color(hex);
    }

    if let Some(rgb) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return parse_rgb_color(rgb);
    }

    if let Some(n) = s.strip_prefix("color") {
        if let Ok(n) = n.parse::<u8>() {
            return Some(Color::Indexed(n));
        }
    }
    if let Ok(n) = s.parse::<u8>() {
        return Some(Color::Indexed(n));
    }

    let color = match s.as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" | "purple" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

/// Parse hex color (rgb or rrggbb, without the leading '#')
fn parse_hex_color(hex: &str) -> Option<Color> {
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 if hex.is_ascii() => Some(Color::Rgb(
            channel(&hex[0..1].repeat(2))?,
            channel(&hex[1..2].repeat(2))?,
            channel(&hex[2..3].repeat(2))?,
        )),
        6 if hex.is_ascii() => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

fn parse_rgb_color(rgb: &str) -> Option<Color> {
    let parts: Vec<&str> = rgb.split(',').map(|s| s.trim()).collect();
    match parts.as_slice() {
        [r, g, b] => Some(Color::Rgb(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("purple"), Some(Color::Magenta));
        assert_eq!(parse_color("default"), Some(Color::Reset));
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_color("#f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_color("#808080"), Some(Color::Rgb(128, 128, 128)));
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("#12345"), None);
    }

    #[test]
    fn test_parse_rgb_and_indexed_color() {
        assert_eq!(parse_color("rgb(1, 2, 3)"), Some(Color::Rgb(1, 2, 3)));
        assert_eq!(parse_color("rgb(1, 2)"), None);
        assert_eq!(parse_color("63"), Some(Color::Indexed(63)));
        assert_eq!(parse_color("color196"), Some(Color::Indexed(196)));
    }

    #[test]
    fn test_parse_unknown_color() {
        assert_eq!(parse_color("foobar"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_from_section_falls_back_on_invalid_color() {
        let section = StyleSection {
            cursor_color: "not-a-color".to_string(),
            directory_color: "#00ff00".to_string(),
            file_color: "white".to_string(),
            border_enabled: false,
            highlight_enabled: false,
            theme: "InspiredGitHub".to_string(),
        };
        let style = StyleConfig::from_section(&section, false);
        assert_eq!(style.cursor_color, StyleConfig::default().cursor_color);
        assert_eq!(style.directory_color, Color::Rgb(0, 255, 0));
        assert_eq!(style.file_color, Color::White);
        assert!(!style.border_enabled);
        assert!(!style.highlight_enabled);
        assert_eq!(style.border_rows(), 0);
        assert_eq!(style.theme, "InspiredGitHub");
    }
}
