use std::ops::Range;

use serde::Serialize;
use thiserror::Error;

use super::MIN_LENGTH;

/// Why an input was handed back without truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Skip {
    #[error("mark is not a string")]
    MarkNotString,
    #[error("input is not a string")]
    NotAString,
    #[error("input is shorter than {} characters after trimming", MIN_LENGTH)]
    TooShort,
    #[error("length is not a number")]
    LengthNotNumber,
    #[error("length must be greater than {}", MIN_LENGTH)]
    LengthTooSmall,
    #[error("length leaves nothing to remove")]
    NothingToRemove,
    #[error("position is not left, center, right, or a non-negative index")]
    UnknownPosition,
}

/// Result of a truncation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Truncation<'a> {
    /// `mark` is the byte range of the marker within `text`
    Truncated { text: String, mark: Range<usize> },
    /// The caller's original input, untrimmed
    Unchanged { original: &'a str, reason: Skip },
}

impl Truncation<'_> {
    pub fn as_str(&self) -> &str {
        match self {
            Truncation::Truncated { text, .. } => text,
            Truncation::Unchanged { original, .. } => original,
        }
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Truncation::Truncated { .. })
    }

    pub fn reason(&self) -> Option<Skip> {
        match self {
            Truncation::Truncated { .. } => None,
            Truncation::Unchanged { reason, .. } => Some(*reason),
        }
    }

    /// Byte range of the marker, if one was inserted
    pub fn mark_range(&self) -> Option<Range<usize>> {
        match self {
            Truncation::Truncated { mark, .. } => Some(mark.clone()),
            Truncation::Unchanged { .. } => None,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Truncation::Truncated { text, .. } => text,
            Truncation::Unchanged { original, .. } => original.to_string(),
        }
    }

    /// Treat an unchanged input as an error
    pub fn into_result(self) -> Result<String, Skip> {
        match self {
            Truncation::Truncated { text, .. } => Ok(text),
            Truncation::Unchanged { reason, .. } => Err(reason),
        }
    }
}

impl std::fmt::Display for Truncation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
