//! Result screen: final score and verdict on a card

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::layout::{centered_rect, draw_button};
use crate::app::state::AppState;
use crate::theme::Theme;

const RESTART_LABEL: &str = "Play Again";

/// Draw the results card
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let session = &state.session;
    let card = centered_rect(80, 70, area);

    let block = Block::default()
        .title(" Quiz Results ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_card));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let score_style = if session.celebrates() {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}/{}", session.score(), session.max_score()),
            score_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} of {} correct", session.correct_count(), session.total_questions()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
    ];
    if let Some(verdict) = session.verdict() {
        let style = Style::default().fg(theme.fg_secondary);
        lines.push(Line::from(Span::styled(verdict.message(), style)));
    }

    let text_height = (lines.len() as u16 + 2).min(inner.height);
    let text_area = Rect { height: text_height, ..inner };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        text_area,
    );

    let bottom = inner.y + inner.height.saturating_sub(4);
    let button_y = (text_area.y + text_area.height + 1).max(bottom);
    state.regions.restart = draw_button(frame, inner, button_y, RESTART_LABEL, theme);
}
