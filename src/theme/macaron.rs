//! Macaron pastel theme

use ratatui::style::Color;

use super::Theme;

/// Soft sage background with pastel option cards
pub const MACARON: Theme = Theme {
    name: String::new(), // Will be set properly with const fn when stabilized

    // Background colors
    bg_primary: Color::Rgb(176, 196, 177), // #b0c4b1
    bg_card: Color::Rgb(255, 250, 250),    // #fffafa

    // Foreground colors
    fg_primary: Color::Rgb(60, 60, 60),    // #3c3c3c
    fg_secondary: Color::Rgb(70, 70, 70),  // #464646
    fg_muted: Color::Rgb(90, 90, 90),      // #5a5a5a

    // Semantic colors
    success: Color::Rgb(56, 142, 60), // #388e3c
    error: Color::Rgb(153, 0, 0),     // #990000

    // Option cards
    option_bg: [
        Color::Rgb(255, 200, 221), // #ffc8dd pink
        Color::Rgb(189, 224, 254), // #bde0fe light blue
        Color::Rgb(251, 248, 204), // #fbf8cc light yellow
        Color::Rgb(207, 186, 240), // #cfbaf0 lavender
    ],
    option_fg: Color::Rgb(60, 60, 60),
    selection: Color::Rgb(255, 165, 140), // #ffa58c coral

    confetti: [
        Color::Rgb(255, 205, 210), // pink
        Color::Rgb(225, 245, 254), // pale blue
        Color::Rgb(232, 245, 233), // mint
        Color::Rgb(255, 243, 224), // pale yellow
        Color::Rgb(243, 229, 245), // lilac
    ],

    // UI elements
    border: Color::Rgb(200, 200, 200),         // #c8c8c8
    border_focused: Color::Rgb(255, 165, 140), // #ffa58c
};

// Workaround for const String
impl Theme {
    pub fn macaron() -> Self {
        Theme { name: "Macaron".to_string(), ..MACARON }
    }
}
