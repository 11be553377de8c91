//! Error types for question bank retrieval

use thiserror::Error;

/// Errors that can occur while retrieving a question bank
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading a local bank file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that could not be read
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP {status} {reason}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Canonical reason phrase, if any
        reason: String,
    },

    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl LoadError {
    /// Check if retrying the same source might succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            LoadError::Io { source, .. } => !matches!(
                source.kind(),
                std::io::ErrorKind::InvalidData | std::io::ErrorKind::PermissionDenied
            ),
            LoadError::Http { status, .. } => *status == 404 || *status == 408 || *status >= 500,
            LoadError::Request(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_shows_status_and_reason() {
        let err = LoadError::Http { status: 404, reason: "Not Found".into() };
        assert_eq!(err.to_string(), "HTTP 404 Not Found");
    }

    #[test]
    fn missing_file_is_recoverable() {
        let err = LoadError::Io {
            path: "questions.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.is_recoverable());
        assert!(err.to_string().starts_with("Failed to read questions.csv"));
    }

    #[test]
    fn invalid_utf8_is_not_recoverable() {
        let err = LoadError::Io {
            path: "bank.csv".into(),
            source: std::io::Error::from(std::io::ErrorKind::InvalidData),
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn client_errors_are_not_recoverable() {
        let err = LoadError::Http { status: 403, reason: "Forbidden".into() };
        assert!(!err.is_recoverable());
        let err = LoadError::Http { status: 503, reason: "Service Unavailable".into() };
        assert!(err.is_recoverable());
    }
}
