//! quizbox - a colorful terminal multiple-choice quiz
//!
//! Questions come from a CSV bank (local file or HTTP). Each playthrough
//! samples five of them, scores 20 points per correct answer and ends on a
//! result screen with confetti.

pub mod app;
pub mod bank;
pub mod config;
pub mod quiz;
pub mod theme;
pub mod ui;

pub use app::App;
pub use bank::{BankSource, Question};
pub use config::Config;
pub use quiz::Session;
pub use theme::Theme;
