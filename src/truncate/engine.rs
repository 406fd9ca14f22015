//! Marker placement and the validity checks that guard it

use tracing::{debug, trace};

use std::ops::Range;

use super::{MIN_LENGTH, Position, Skip, TruncateOptions, Truncation};

/// Shortens strings by replacing one interior span with a marker
#[derive(Debug, Clone, Default)]
pub struct Truncator {
    options: TruncateOptions,
}

impl Truncator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: TruncateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.options.mark = mark.into();
        self
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.options.position = position;
        self
    }

    pub fn options(&self) -> &TruncateOptions {
        &self.options
    }

    /// Truncate `input` to `length` characters.
    ///
    /// The input is trimmed before measuring. When any check fails the
    /// untrimmed input comes back as [`Truncation::Unchanged`].
    pub fn apply<'a>(&self, input: &'a str, length: usize) -> Truncation<'a> {
        apply_with(input, length, &self.options)
    }
}

/// Truncate `input` to `length` characters, returning the input unchanged
/// when it can't be shortened.
///
/// ```
/// use smart_truncate::{Position, TruncateOptions, truncate};
///
/// let options = TruncateOptions::new().with_position(Position::Index(4));
/// assert_eq!(truncate("Steve Miller", 9, &options), "Stev…ller");
/// ```
pub fn truncate(input: &str, length: usize, options: &TruncateOptions) -> String {
    apply_with(input, length, options).into_string()
}

fn apply_with<'a>(input: &'a str, length: usize, options: &TruncateOptions) -> Truncation<'a> {
    let trimmed = input.trim();
    let outcome = check(trimmed, length, options.mark_offset())
        .map(|count| place(trimmed, count, length, &options.mark, options.position));

    match outcome {
        Ok((text, mark)) => Truncation::Truncated { text, mark },
        Err(reason) => {
            debug!(%reason, length, "input left unchanged");
            Truncation::Unchanged {
                original: input,
                reason,
            }
        }
    }
}

/// Validate a trimmed input against the target length. Returns the input's
/// character count.
fn check(trimmed: &str, length: usize, mark_offset: usize) -> Result<usize, Skip> {
    let count = trimmed.chars().count();

    if count < MIN_LENGTH {
        return Err(Skip::TooShort);
    }
    if length <= MIN_LENGTH {
        return Err(Skip::LengthTooSmall);
    }
    if length >= count.saturating_sub(mark_offset) {
        return Err(Skip::NothingToRemove);
    }

    Ok(count)
}

/// Build the truncated string and the byte range of its marker. Assumes the
/// length checks passed.
pub(crate) fn place(
    s: &str,
    count: usize,
    length: usize,
    mark: &str,
    position: Position,
) -> (String, Range<usize>) {
    let mark_offset = mark.chars().count();
    let keep = length.saturating_sub(mark_offset);

    let (head_len, tail_len) = match position {
        Position::Right => (keep, 0),
        Position::Index(index) if index >= keep => (keep, 0),
        Position::Index(index) => (index, keep - index),
        // Left and center use a one-character offset regardless of the mark
        Position::Left => (0, length - 1),
        Position::Center => {
            let head = length / 2;
            (head, length - head - 1)
        }
    };
    trace!(%position, head_len, tail_len, "placing mark");

    let head = &s[..byte_offset(s, head_len)];
    let tail = &s[byte_offset(s, count - tail_len)..];

    let mut result = String::with_capacity(head.len() + mark.len() + tail.len());
    result.push_str(head);
    result.push_str(mark);
    result.push_str(tail);
    (result, head.len()..head.len() + mark.len())
}

/// Byte offset of the `n`th character, or the end of the string
fn byte_offset(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}
