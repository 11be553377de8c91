//! Question bank: data model, CSV parsing and retrieval

pub mod csv;
pub mod error;
pub mod loader;

pub use csv::parse;
pub use error::LoadError;
pub use loader::BankSource;

use serde::{Deserialize, Serialize};

/// Number of options every question carries
pub const OPTION_COUNT: usize = 4;

/// A single multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The question text
    pub prompt: String,

    /// Option texts, labelled A-D by position
    pub options: [String; OPTION_COUNT],

    /// Correct label, uppercased (usually one of A-D)
    pub answer: String,

    /// Optional explanation; stored with the question but not displayed
    #[serde(default)]
    pub feedback: String,
}

impl Question {
    /// Index of the correct option, if the answer is a valid label
    pub fn correct_index(&self) -> Option<usize> {
        Label::parse(&self.answer).map(Label::index)
    }

    /// Whether the option at `index` is the correct one
    pub fn is_correct(&self, index: usize) -> bool {
        Label::from_index(index).is_some_and(|label| label.as_str() == self.answer)
    }
}

/// Option label identifying an option by position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    /// All labels in positional order
    pub const ALL: [Label; OPTION_COUNT] = [Label::A, Label::B, Label::C, Label::D];

    /// Label for an option position (0 -> A ... 3 -> D)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this label's option
    pub fn index(self) -> usize {
        match self {
            Label::A => 0,
            Label::B => 1,
            Label::C => 2,
            Label::D => 3,
        }
    }

    /// Parse a label, case-insensitively, ignoring surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Some(Label::A),
            "B" => Some(Label::B),
            "C" => Some(Label::C),
            "D" => Some(Label::D),
            _ => None,
        }
    }

    /// The label as an uppercase string
    pub fn as_str(self) -> &'static str {
        match self {
            Label::A => "A",
            Label::B => "B",
            Label::C => "C",
            Label::D => "D",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
