//! Overlay shown when the question bank cannot be retrieved

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::{centered_rect, draw_button};
use crate::bank::LoadError;
use crate::theme::Theme;

/// Draw the load error overlay, returning the retry button area
pub fn draw(frame: &mut Frame, area: Rect, error: &LoadError, theme: &Theme) -> Option<Rect> {
    let overlay_area = centered_rect(70, 50, area);

    // Clear the background area
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .title(" Question Bank Error ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.bg_card));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let hint = if error.is_recoverable() {
        "Check that the bank exists and is served over HTTP or readable on disk."
    } else {
        "The bank cannot be read as UTF-8 text or access was refused."
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Failed to load the question bank",
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(error.to_string(), Style::default().fg(theme.fg_secondary))),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(theme.fg_muted))),
    ];

    let text_area = Rect { height: inner.height.saturating_sub(4), ..inner };
    let para = Paragraph::new(text).alignment(Alignment::Center).wrap(Wrap { trim: true });
    frame.render_widget(para, text_area);

    draw_button(frame, inner, inner.y + inner.height.saturating_sub(3), "Retry [r]", theme)
}
