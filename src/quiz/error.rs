//! Errors raised by the quiz session

use thiserror::Error;

/// Errors that can occur when driving a quiz session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// No questions are available to sample from
    #[error("The question bank is empty or not loaded yet")]
    EmptyBank,
}
