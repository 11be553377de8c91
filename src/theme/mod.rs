//! Theming system for quizbox

mod macaron;

pub use macaron::MACARON;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// A color theme for the application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,

    // Background colors
    pub bg_primary: Color,
    pub bg_card: Color,

    // Foreground colors
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub fg_muted: Color,

    // Semantic colors
    pub success: Color,
    pub error: Color,

    // Answer option cards, A through D
    pub option_bg: [Color; 4],
    pub option_fg: Color,
    /// Outline of the chosen option while the answer is locked
    pub selection: Color,

    /// Colors confetti particles are drawn from
    pub confetti: [Color; 5],

    // UI elements
    pub border: Color,
    pub border_focused: Color,
}

impl Theme {
    /// Card color for the option at `index`
    pub fn option_color(&self, index: usize) -> Color {
        self.option_bg.get(index).copied().unwrap_or(self.bg_card)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::macaron()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_macaron() {
        let theme = Theme::default();
        assert_eq!(theme.name, "Macaron");
    }

    #[test]
    fn option_colors_are_distinct() {
        let theme = Theme::default();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(theme.option_color(i), theme.option_color(j));
            }
        }
    }

    #[test]
    fn out_of_range_option_uses_card_color() {
        let theme = Theme::default();
        assert_eq!(theme.option_color(9), theme.bg_card);
    }
}
