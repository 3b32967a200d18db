//! Tree rendering

use std::path::Path;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::common::pane_block;
use super::StyleConfig;
use crate::tree::{TreeNavigator, TreeNode};

/// Render the file tree pane
pub fn render_tree(frame: &mut Frame, navigator: &TreeNavigator, style: &StyleConfig, area: Rect) {
    let title = abbreviate_path(
        navigator.root_path(),
        (area.width as usize).saturating_sub(4),
    );
    let block = pane_block(style, &title);

    if let Some(error) = navigator.error() {
        let para = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(para, area);
        return;
    }

    let visible_height = area.height.saturating_sub(style.border_rows()) as usize;
    let cursor = navigator.cursor();

    let items: Vec<ListItem> = navigator
        .visible_entries()
        .into_iter()
        .enumerate()
        .skip(navigator.offset())
        .take(visible_height)
        .map(|(index, entry)| {
            let loading = navigator.is_loading(&entry.path);
            ListItem::new(entry_line(style, entry, cursor == Some(index), loading))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Indent, fold glyph, name and an optional status suffix
fn entry_line(
    style: &StyleConfig,
    entry: &TreeNode,
    focused: bool,
    loading: bool,
) -> Line<'static> {
    let indent = "  ".repeat(entry.depth);

    let (glyph, mut line_style) = if entry.is_dir() {
        let glyph = if entry.is_expanded() { "▾ " } else { "▸ " };
        (glyph, Style::default().fg(style.directory_color))
    } else {
        ("  ", Style::default().fg(style.file_color))
    };

    if focused {
        line_style = line_style
            .bg(style.cursor_color)
            .add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![Span::styled(
        format!("{}{}{}", indent, glyph, entry.name),
        line_style,
    )];
    if loading {
        spans.push(Span::styled(" …", Style::default().fg(Color::DarkGray)));
    } else if let Some(reason) = entry.error() {
        spans.push(Span::styled(
            format!(" ({})", reason),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}

/// Abbreviate a path to fit within max_width
fn abbreviate_path(path: &Path, max_width: usize) -> String {
    let full_path = path.display().to_string();

    if full_path.chars().count() <= max_width {
        return full_path;
    }

    let components: Vec<&str> = full_path.split('/').collect();
    let last = components.last().copied().unwrap_or("");

    let mut abbreviated: Vec<String> = components[..components.len().saturating_sub(1)]
        .iter()
        .map(|c| c.chars().next().map(String::from).unwrap_or_default())
        .collect();
    abbreviated.push(last.to_string());

    let result = abbreviated.join("/");
    if result.chars().count() <= max_width {
        return result;
    }

    let last_len = last.chars().count();
    if last_len <= max_width {
        last.to_string()
    } else if max_width > 3 {
        let tail: String = last.chars().skip(last_len - (max_width - 3)).collect();
        format!("...{}", tail)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;
    use std::path::PathBuf;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_failed_directory_row_shows_reason() {
        let style = StyleConfig::default();
        let mut node = TreeNode::new(PathBuf::from("/r/locked"), NodeKind::Directory, 1);
        assert_eq!(text(&entry_line(&style, &node, false, false)), "  ▸ locked");

        node.set_failed("permission denied".to_string());
        let line = entry_line(&style, &node, false, false);
        assert_eq!(text(&line), "  ▸ locked (permission denied)");
        assert_eq!(line.spans[1].style.fg, Some(Color::Red));

        // While a retry is in flight the loading marker wins
        let line = entry_line(&style, &node, false, true);
        assert_eq!(text(&line), "  ▸ locked …");
    }

    #[test]
    fn test_abbreviate_short_path_unchanged() {
        assert_eq!(abbreviate_path(Path::new("/tmp/a"), 20), "/tmp/a");
    }

    #[test]
    fn test_abbreviate_long_path() {
        assert_eq!(
            abbreviate_path(Path::new("/home/user/projects/splitview"), 20),
            "/h/u/p/splitview"
        );
        assert_eq!(
            abbreviate_path(Path::new("/home/user/projects/splitview"), 9),
            "splitview"
        );
        assert_eq!(
            abbreviate_path(Path::new("/home/user/projects/splitview"), 6),
            "...iew"
        );
    }

    #[test]
    fn test_abbreviate_zero_width() {
        assert_eq!(abbreviate_path(Path::new("/home/user"), 0), "");
    }
}
