//! Error Types
//!
//! A run can fail in two broad ways: the input corpus cannot be read, or the
//! engine (local or behind a connect server) rejects or fails a query.

use datafusion::arrow::error::ArrowError;
use datafusion::error::DataFusionError;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, WordCountError>;

#[derive(Debug, thiserror::Error)]
pub enum WordCountError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("engine error: {0}")]
    Engine(#[from] DataFusionError),

    #[error("arrow error: {0}")]
    Arrow(#[from] ArrowError),

    #[error("connect error: {0}")]
    Connect(#[from] reqwest::Error),

    /// The connect server answered, but not with success.
    #[error("remote engine returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// A query came back without the column or shape the caller asked for.
    #[error("unexpected query result: {0}")]
    UnexpectedResult(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl WordCountError {
    /// True for failures raised by the engine rather than by input handling.
    pub fn is_engine_error(&self) -> bool {
        matches!(
            self,
            WordCountError::Engine(_)
                | WordCountError::Arrow(_)
                | WordCountError::Connect(_)
                | WordCountError::Remote { .. }
                | WordCountError::UnexpectedResult(_)
        )
    }
}
