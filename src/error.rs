use thiserror::Error;

use crate::report::ScalarField;

/// Why a count token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("empty value")]
    Empty,
    #[error("not a decimal number")]
    InvalidDigit,
    #[error("does not fit in 64 bits")]
    OutOfRange,
}

/// What was wrong with a line inside a ranked section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntryFault {
    #[error("expected two parts, found {0}")]
    FieldCount(usize),
    #[error("expected uint64 as first part: {0}")]
    Count(NumberError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: invalid {field} value {value:?}: {source}")]
    MalformedScalar {
        line: usize,
        field: ScalarField,
        value: String,
        #[source]
        source: NumberError,
    },

    #[error("line {line}: malformed label pair {text:?}: {fault}")]
    MalformedEntry {
        line: usize,
        text: String,
        fault: EntryFault,
    },

    #[error("failed to read report: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// 1-based number of the offending line, when the failure came from content.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedScalar { line, .. } | ParseError::MalformedEntry { line, .. } => {
                Some(*line)
            }
            ParseError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
