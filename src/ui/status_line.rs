//! Status line at the bottom of the screen

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::state::{AppState, Screen};
use crate::theme::Theme;

/// Draw the status message, or the key hints for the current screen
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let (text, style) = match state.message {
        Some(ref msg) => {
            let style = if state.is_error {
                Style::default().fg(theme.error)
            } else {
                Style::default().fg(theme.fg_muted)
            };
            (msg.as_str(), style)
        }
        None => (hint(state.screen()), Style::default().fg(theme.fg_muted)),
    };

    let line = Line::from(Span::styled(format!(" {}", text), style));
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(theme.bg_primary)), area);
}

/// Key hints shown when there is no message
fn hint(screen: Screen) -> &'static str {
    match screen {
        Screen::Start => "[Enter] Start    [r] Reload questions    [q] Quit",
        Screen::Question => "[a-d] Answer    [j/k] Select    [Enter] Confirm    [Esc] Abandon",
        Screen::Result => "[Enter] Play again    [q] Quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_has_a_hint() {
        for screen in [Screen::Start, Screen::Question, Screen::Result] {
            assert!(!hint(screen).is_empty());
        }
    }
}
