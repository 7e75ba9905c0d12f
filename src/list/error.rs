//! Error types for the paged list.

use thiserror::Error;

/// Failure reported by a data source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The source could not reach its backend.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered but the response could not be understood.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend refused the request.
    #[error("rejected: {0}")]
    Rejected(String),
}

impl FetchError {
    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates a rejection.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Why a fetch produced no page.
///
/// Both variants end the fetch the same way; only `Error` is reported to the
/// error observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    /// The source failed.
    Error(FetchError),
    /// The source succeeded without data.
    EmptyResult,
}

/// Failure of a [`Handle`](super::Handle) command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandleError {
    /// The list the handle belongs to has been dropped.
    #[error("paged list is no longer running")]
    Closed,
}
