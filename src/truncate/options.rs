use serde::{Deserialize, Serialize};

use super::Position;

/// Horizontal ellipsis (U+2026)
pub const DEFAULT_MARK: &str = "\u{2026}";

/// Inputs shorter than this (after trimming) are never truncated, and the
/// target length must be strictly greater than it.
pub const MIN_LENGTH: usize = 4;

/// Marker text and placement used by a truncation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateOptions {
    pub mark: String,
    pub position: Position,
}

impl Default for TruncateOptions {
    fn default() -> Self {
        Self {
            mark: DEFAULT_MARK.to_string(),
            position: Position::default(),
        }
    }
}

impl TruncateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = mark.into();
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Length of the marker in `char`s (Unicode scalar values), so a marker
    /// outside the BMP such as an emoji counts as 1, not 2 UTF-16 units
    pub fn mark_offset(&self) -> usize {
        self.mark.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TruncateOptions::default();
        assert_eq!(options.mark, "…");
        assert_eq!(options.position, Position::Right);
        assert_eq!(options.mark_offset(), 1);
    }

    #[test]
    fn test_mark_offset_counts_chars() {
        assert_eq!(TruncateOptions::new().with_mark("—").mark_offset(), 1);
        assert_eq!(TruncateOptions::new().with_mark("...").mark_offset(), 3);
        assert_eq!(TruncateOptions::new().with_mark("").mark_offset(), 0);
        assert_eq!(TruncateOptions::new().with_mark("\u{1F4A5}").mark_offset(), 1);
    }

    #[test]
    fn test_deserialize_partial() {
        let options: TruncateOptions = serde_json::from_str(r#"{"position": 4}"#).unwrap();
        assert_eq!(options.mark, DEFAULT_MARK);
        assert_eq!(options.position, Position::Index(4));

        let options: TruncateOptions = serde_json::from_str(r#"{"mark": "~"}"#).unwrap();
        assert_eq!(options.mark, "~");
        assert_eq!(options.position, Position::Right);
    }
}
