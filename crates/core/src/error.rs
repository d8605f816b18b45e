//! Statement error model.

use thiserror::Error;

use crate::id::PlayId;

/// Result type used across the billing layer.
pub type StatementResult<T> = Result<T, StatementError>;

/// Failure while computing a statement.
///
/// Every variant is fatal for the statement being built: callers never get a
/// partially computed report.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A play's genre is not one of the supported values.
    #[error("unknown type: {0}")]
    UnknownGenre(String),

    /// A performance references a play id that is not in the catalog.
    #[error("unknown play: {0}")]
    UnknownPlay(PlayId),

    /// Summing line amounts or credits overflowed.
    #[error("statement total overflow")]
    AmountOverflow,

    /// A value failed validation (e.g. malformed identifier).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl StatementError {
    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }

    pub fn unknown_play(play_id: impl Into<PlayId>) -> Self {
        Self::UnknownPlay(play_id.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
