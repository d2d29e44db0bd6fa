//! Error types shared by the loader and the transform engine.

use thiserror::Error;

/// Result type alias for dataset and transform operations.
pub type Result<T> = std::result::Result<T, SunspotError>;

/// Coarse classification of a [`SunspotError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The dataset could not be read at all.
    Io,
    /// A row of the dataset is malformed; the load is aborted.
    Parse,
    /// A requested year bound is absent or the bounds are inverted.
    Range,
    /// A smoothing window or cycle length is out of its domain.
    Param,
}

#[derive(Error, Debug)]
pub enum SunspotError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    /// `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("year {year} is not present in the dataset")]
    YearNotFound { year: i32 },

    #[error("start year {start} is after end year {end}")]
    InvertedRange { start: i32, end: i32 },

    #[error("invalid {name}: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: String },
}

impl SunspotError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SunspotError::Io(_) => ErrorKind::Io,
            SunspotError::Parse { .. } => ErrorKind::Parse,
            SunspotError::YearNotFound { .. } | SunspotError::InvertedRange { .. } => {
                ErrorKind::Range
            }
            SunspotError::InvalidParameter { .. } => ErrorKind::Param,
        }
    }

    pub(crate) fn parse(line: u64, message: impl Into<String>) -> Self {
        SunspotError::Parse {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn param(name: &'static str, value: impl ToString) -> Self {
        SunspotError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}
