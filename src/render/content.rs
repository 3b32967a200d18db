//! Content pane rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::pane_block;
use super::StyleConfig;
use crate::handler::key::HELP_LINES;
use crate::viewer::{ContentBuffer, ContentViewer, ViewerContent};

/// Render the content pane for the viewer's current state
pub fn render_content(frame: &mut Frame, viewer: &ContentViewer, style: &StyleConfig, area: Rect) {
    let title = viewer
        .path()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let block = pane_block(style, &title);

    let para = match viewer.content() {
        ViewerContent::Empty => Paragraph::new(""),
        ViewerContent::Loading(_) => {
            Paragraph::new("Loading…").style(Style::default().fg(Color::DarkGray))
        }
        ViewerContent::Failed { path, message } => Paragraph::new(vec![
            Line::styled(
                format!("Cannot open {}", path.display()),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::styled(message.clone(), Style::default().fg(Color::Red)),
        ])
        .wrap(Wrap { trim: false }),
        ViewerContent::Loaded(buffer) => {
            let visible_height = area.height.saturating_sub(style.border_rows()) as usize;
            Paragraph::new(visible_lines(buffer, visible_height, style.line_numbers))
        }
    };

    frame.render_widget(para.block(block), area);
}

/// Lines of `buffer` from its scroll offset, at most `height` of them
fn visible_lines(buffer: &ContentBuffer, height: usize, line_numbers: bool) -> Vec<Line<'_>> {
    let start = buffer.scroll().min(buffer.line_count());
    let end = (start + height).min(buffer.line_count());

    let gutter = |index: usize| {
        Span::styled(
            format!("{:4} ", index + 1),
            Style::default().fg(Color::DarkGray),
        )
    };

    (start..end)
        .map(|index| {
            let mut spans = Vec::new();
            if line_numbers {
                spans.push(gutter(index));
            }
            match buffer.styled_lines() {
                Some(styled) => spans.extend(styled[index].segments.iter().map(|segment| {
                    Span::styled(segment.text.as_str(), Style::default().fg(segment.color))
                })),
                None => spans.push(Span::raw(buffer.lines()[index].as_str())),
            }
            Line::from(spans)
        })
        .collect()
}

/// Placeholder for the content pane before any file is opened
pub fn render_help(frame: &mut Frame, style: &StyleConfig, area: Rect) {
    let key_style = Style::default()
        .fg(style.directory_color)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from("Select a file and press p to view it."),
        Line::from(""),
    ];
    lines.extend(HELP_LINES.iter().map(|(keys, what)| {
        Line::from(vec![
            Span::styled(format!("{:<12}", keys), key_style),
            Span::raw(*what),
        ])
    }));

    let para = Paragraph::new(lines).block(pane_block(style, "Help"));
    frame.render_widget(para, area);
}
