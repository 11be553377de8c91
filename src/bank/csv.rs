//! Tolerant CSV parsing for question banks
//!
//! The parser never fails: malformed or incomplete rows are dropped and
//! ragged rows are padded with empty cells. Quoted fields may contain commas,
//! line breaks and doubled quotes (`""`).

use super::{OPTION_COUNT, Question};

/// Column names recognised in a header row (lowercase)
const QUESTION: &str = "question";
const OPTIONS: [&str; OPTION_COUNT] = ["optiona", "optionb", "optionc", "optiond"];
const ANSWER: &str = "answer";
const FEEDBACK: &str = "feedback";

/// Parse bank text into questions, skipping unusable rows
pub fn parse(text: &str) -> Vec<Question> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut rows = split_rows(text).into_iter();
    let Some(first) = rows.next() else {
        return Vec::new();
    };

    // A header names both the question and answer columns
    let header = ColumnMap::from_header(&first);
    let has_header = header.is_some();
    let columns = header.unwrap_or_else(ColumnMap::positional);
    let data = (!has_header).then_some(first).into_iter().chain(rows);

    let questions: Vec<Question> = data.filter_map(|row| columns.question(&row)).collect();
    tracing::debug!(count = questions.len(), has_header, "Parsed question bank");
    questions
}

/// Split text into rows of raw fields
///
/// Rows whose fields are all empty are dropped. The last row is kept even
/// without a trailing line break.
pub fn split_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => row.push(std::mem::take(&mut cell)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut cell));
                push_row(&mut rows, std::mem::take(&mut row));
            }
            _ => cell.push(ch),
        }
    }

    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        push_row(&mut rows, row);
    }

    rows
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    if row.iter().any(|cell| !cell.is_empty()) {
        rows.push(row);
    }
}

/// Column positions for each question field
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnMap {
    question: Option<usize>,
    options: [Option<usize>; OPTION_COUNT],
    answer: Option<usize>,
    feedback: Option<usize>,
}

impl ColumnMap {
    /// Fixed order used when the bank has no header
    fn positional() -> Self {
        Self {
            question: Some(0),
            options: [Some(1), Some(2), Some(3), Some(4)],
            answer: Some(5),
            feedback: Some(6),
        }
    }

    /// Build a mapping from a header row, if the row is one
    fn from_header(row: &[String]) -> Option<Self> {
        let names: Vec<String> = row.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |name: &str| names.iter().position(|h| h == name);

        if find(QUESTION).is_none() || find(ANSWER).is_none() {
            return None;
        }

        Some(Self {
            question: find(QUESTION),
            options: OPTIONS.map(find),
            answer: find(ANSWER),
            feedback: find(FEEDBACK),
        })
    }

    /// Map a data row to a question, or `None` if it lacks a prompt or answer
    fn question(&self, row: &[String]) -> Option<Question> {
        let prompt = cell(row, self.question);
        let answer = cell(row, self.answer).to_uppercase();

        if prompt.is_empty() || answer.is_empty() {
            return None;
        }

        Some(Question {
            prompt,
            options: self.options.map(|column| cell(row, column)),
            answer,
            feedback: cell(row, self.feedback),
        })
    }
}

/// Trimmed cell at `column`, or empty when unmapped or past the row's end
fn cell(row: &[String], column: Option<usize>) -> String {
    column.and_then(|i| row.get(i)).map(|value| value.trim().to_string()).unwrap_or_default()
}
