//! Question screen: prompt and four option cards

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use textwrap::{Options, wrap};

use crate::app::state::AppState;
use crate::bank::Label;
use crate::theme::Theme;

/// Rows per option card, borders included
const CARD_HEIGHT: u16 = 3;
const CARD_GAP: u16 = 1;

/// Draw the current question
pub fn draw(frame: &mut Frame, area: Rect, state: &mut AppState, theme: &Theme) {
    state.regions.options.clear();

    let session = &state.session;
    let Some(question) = session.current_question() else {
        return;
    };

    let margin = (area.width / 25).max(1);
    let content = Rect {
        x: area.x + margin,
        y: area.y + 1,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(1),
    };

    // Question number and prompt
    let header = vec![
        Line::from(Span::styled(
            format!("Question {} / {}", session.current_index() + 1, session.total_questions()),
            Style::default().fg(theme.fg_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt.as_str(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
    ];
    let header_height = prompt_height(&question.prompt, content.width).min(content.height);
    let header_area = Rect { height: header_height, ..content };
    let header = Paragraph::new(header)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(theme.bg_primary));
    frame.render_widget(header, header_area);

    // Option cards
    let selected = session.selected();
    let locked = session.is_locked();
    let mut regions = Vec::with_capacity(Label::ALL.len());
    let mut y = header_area.y + header_area.height + 1;

    for (label, option) in Label::ALL.iter().zip(question.options.iter()) {
        if y + CARD_HEIGHT > content.y + content.height {
            break;
        }
        let card = Rect { x: content.x, y, width: content.width, height: CARD_HEIGHT };
        let index = label.index();

        let is_chosen = selected == Some(*label);
        let is_highlighted = !locked && index == state.highlighted;

        let (border_type, border_color) = if is_chosen {
            (BorderType::Thick, theme.selection)
        } else if is_highlighted {
            (BorderType::Double, theme.border_focused)
        } else {
            (BorderType::Rounded, theme.border)
        };

        let mut text_style = Style::default().fg(theme.option_fg).bg(theme.option_color(index));
        if is_chosen || is_highlighted {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.option_color(index)));

        let text = Paragraph::new(format!(" {}. {}", label, option)).style(text_style).block(block);
        frame.render_widget(text, card);

        regions.push(card);
        y += CARD_HEIGHT + CARD_GAP;
    }

    state.regions.options = regions;
}

/// Rows needed for the number line, a blank line and the wrapped prompt
fn prompt_height(prompt: &str, width: u16) -> u16 {
    let wrapped = wrap(prompt, Options::new(usize::from(width.max(1)))).len();
    2 + wrapped.max(1) as u16
}
