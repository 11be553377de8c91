//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::state::{HitRegions, Screen};
use crate::bank::Label;

/// Actions that can be taken in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Quiz lifecycle
    Start,
    Restart,
    Retry,

    // Answering
    Answer(usize),
    Up,
    Down,
    Confirm,

    // Leaving
    Back,
    Quit,
}

/// Map a key press to an action for the given screen
pub fn key_to_action(screen: Screen, key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Start => match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') => Some(Action::Start),
            KeyCode::Char('r') => Some(Action::Retry),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
        Screen::Question => match key {
            KeyCode::Char(c @ ('a'..='d' | 'A'..='D')) => {
                Label::parse(c.encode_utf8(&mut [0; 4])).map(|label| Action::Answer(label.index()))
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = c.to_digit(10).map_or(0, |digit| digit as usize - 1);
                Label::from_index(index).map(|label| Action::Answer(label.index()))
            }
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Some(Action::Down),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Some(Action::Up),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Result => match key {
            KeyCode::Enter | KeyCode::Char('r') => Some(Action::Restart),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Map a left click to an action using the regions of the last frame
pub fn mouse_to_action(screen: Screen, event: MouseEvent, regions: &HitRegions) -> Option<Action> {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let hit = |area: Option<Rect>| {
        area.is_some_and(|a| a.contains(Position::new(event.column, event.row)))
    };

    if hit(regions.retry) {
        return Some(Action::Retry);
    }

    match screen {
        Screen::Start => hit(regions.start).then_some(Action::Start),
        Screen::Question => regions.option_at(event.column, event.row).map(Action::Answer),
        Screen::Result => hit(regions.restart).then_some(Action::Restart),
    }
}
