//! Question bank retrieval from a local file or an HTTP URL

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;

use super::{LoadError, Question, parse};

/// Where a question bank is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankSource {
    /// A CSV file on disk
    File(PathBuf),
    /// A CSV file served over HTTP(S)
    Url(String),
}

impl BankSource {
    /// Request timeout for HTTP sources
    const HTTP_TIMEOUT: Duration = Duration::from_secs(15);

    /// Retrieve the raw bank text
    pub async fn fetch_text(&self) -> Result<String, LoadError> {
        match self {
            BankSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|source| {
                LoadError::Io { path: path.display().to_string(), source }
            }),
            BankSource::Url(url) => Self::fetch_url(url).await,
        }
    }

    /// Retrieve and parse the bank
    ///
    /// A bank without usable rows is not an error here; it simply yields no
    /// questions.
    pub async fn load(&self) -> Result<Vec<Question>, LoadError> {
        let text = self.fetch_text().await?;
        let questions = parse(&text);
        tracing::info!(source = %self, count = questions.len(), "Question bank loaded");
        Ok(questions)
    }

    async fn fetch_url(url: &str) -> Result<String, LoadError> {
        let client = Client::builder().timeout(Self::HTTP_TIMEOUT).build()?;

        // Always revalidate so edits to the bank show up on retry
        let response = client.get(url).header("cache-control", "no-cache").send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

impl FromStr for BankSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Ok(BankSource::Url(s.to_string()))
        } else {
            Ok(BankSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for BankSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankSource::File(path) => write!(f, "{}", path.display()),
            BankSource::Url(url) => f.write_str(url),
        }
    }
}
