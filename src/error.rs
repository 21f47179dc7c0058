// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Network, DNS, timeout or a non-success HTTP status.
    #[error("error loading {url}: {message}")]
    Transport { url: String, message: String },

    /// A required element is missing from the markup.
    #[error("{0}")]
    Extraction(String),

    /// Preview code missing from the expected-status table.
    #[error("unknown preview code: {0:?}")]
    Classification(String),

    #[error("{0}")]
    Configuration(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),
}

impl ScrapeError {
    pub fn transport(url: impl ToString, err: impl ToString) -> Self {
        ScrapeError::Transport { url: url.to_string(), message: err.to_string() }
    }

    /// Per-record failures that skip the record instead of ending the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScrapeError::Transport { .. } | ScrapeError::Extraction(_))
    }
}
