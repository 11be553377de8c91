//! Start screen with a typed-in title and the start button

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
};

use super::layout::draw_button;
use crate::app::state::{AppState, BankStatus};
use crate::quiz::{POINTS_PER_QUESTION, SESSION_SIZE};
use crate::theme::Theme;

const TITLE: &str = "Multiple Choice Quiz";
const START_LABEL: &str = "Start Quiz";

/// Line under the title describing the scoring
fn subtitle() -> String {
    format!("{} points per question, {} questions in total", POINTS_PER_QUESTION, SESSION_SIZE)
}

/// Short description of the bank's retrieval status
fn bank_line(bank: &BankStatus) -> String {
    match bank {
        BankStatus::Loading => "Loading questions...".to_string(),
        BankStatus::Ready(questions) if questions.is_empty() => {
            "The question bank has no usable questions".to_string()
        }
        BankStatus::Ready(questions) => format!("{} questions in the bank", questions.len()),
        BankStatus::Failed(_) => "Question bank unavailable".to_string(),
    }
}

/// Draw one centered line of text at row `y`, if it fits
fn draw_line(frame: &mut Frame, area: Rect, y: u16, text: String, style: Style) {
    if y >= area.y + area.height {
        return;
    }
    let line_area = Rect { x: area.x, y, width: area.width, height: 1 };
    frame.render_widget(Paragraph::new(text).style(style).alignment(Alignment::Center), line_area);
}

/// Draw the start screen
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    let bg = theme.bg_primary;
    let top = area.y + area.height.saturating_sub(10) / 2;

    // Title types itself in; pad to keep it centered
    let title_len = TITLE.chars().count();
    let shown = state.title.title_chars(title_len);
    let title: String =
        TITLE.chars().take(shown).chain(std::iter::repeat_n(' ', title_len - shown)).collect();
    let title_style = Style::default().fg(theme.fg_primary).bg(bg).add_modifier(Modifier::BOLD);
    draw_line(frame, area, top, title, title_style);

    if !state.title.show_subtitle() {
        state.regions.start = None;
        return;
    }

    let muted = Style::default().fg(theme.fg_muted).bg(bg);
    draw_line(frame, area, top + 2, subtitle(), muted);
    draw_line(frame, area, top + 3, bank_line(&state.bank), muted);

    state.regions.start = draw_button(frame, area, top + 5, START_LABEL, theme);
}
