//! Layout utilities and common components

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Theme;

/// Fill an area with the theme background
pub fn fill_background(frame: &mut Frame, area: Rect, theme: &Theme) {
    let style = Style::default().bg(theme.bg_primary);
    frame.render_widget(Block::default().style(style), area);
}

/// Draw a bordered button centered horizontally at row `y`, returning its area
pub fn draw_button(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    label: &str,
    theme: &Theme,
) -> Option<Rect> {
    let width = (label.chars().count() as u16 + 6).min(area.width);
    let height = 3;
    if y + height > area.y + area.height {
        return None;
    }

    let button = Rect { x: area.x + (area.width - width) / 2, y, width, height };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.bg_card));

    let text = Paragraph::new(label)
        .style(Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(text, button);
    Some(button)
}

/// Create a centered rectangle with the given percentage of width and height
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert_eq!(inner.width, 60);
        assert_eq!(inner.height, 20);
        assert_eq!(inner.x, 20);
        assert_eq!(inner.y, 15);
    }
}
