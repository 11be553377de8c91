//! UI rendering components

pub mod confetti;
pub mod layout;
pub mod load_error;
pub mod question;
pub mod result;
pub mod start;
pub mod status_line;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::state::{AppState, BankStatus, Screen};
use crate::theme::Theme;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let area = frame.area();
    state.regions.frame = area;

    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);

    layout::fill_background(frame, main_area, theme);

    match state.screen() {
        Screen::Start => {
            start::draw(frame, main_area, state, theme);
            state.regions.retry = match &state.bank {
                BankStatus::Failed(error) => load_error::draw(frame, main_area, error, theme),
                _ => None,
            };
        }
        Screen::Question => {
            state.regions.retry = None;
            question::draw(frame, main_area, state, theme);
        }
        Screen::Result => {
            state.regions.retry = None;
            result::draw(frame, main_area, state, theme);
        }
    }

    confetti::draw(frame, &state.confetti, theme, state.frame_count);
    status_line::draw(frame, status_area, state, theme);
}
