//! Error types for loading and aggregating benchmark documents.

use thiserror::Error;

/// A document parsed but failed boundary validation.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("score {value} for {context} is outside 0..=100")]
    ScoreOutOfRange { context: String, value: f64 },

    #[error("prompt key `{0}` does not contain a prompt number")]
    PromptKey(String),

    #[error("prompt number must be at least 1 ({0})")]
    PromptNumber(String),

    #[error("model identifier is empty ({0})")]
    EmptyModel(String),
}

/// Failure to obtain one of the dashboard documents.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {document}: {reason}")]
    Fetch { document: String, reason: String },

    #[error("{document} responded with HTTP {status}")]
    Status { document: String, status: u16 },

    #[error("{document} is invalid: {source}")]
    Invalid {
        document: String,
        #[source]
        source: DatasetError,
    },
}

impl LoadError {
    pub fn document(&self) -> &str {
        match self {
            Self::Fetch { document, .. }
            | Self::Status { document, .. }
            | Self::Invalid { document, .. } => document,
        }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("at least one judge must stay active")]
    NoActiveJudges,
}
