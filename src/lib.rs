//! Shorten strings to a target length by replacing one span with a marker.
//!
//! The marker can be placed at the start, the middle, the end, or at an
//! explicit character index of the result. Inputs that can't be shortened
//! are handed back untouched.

pub mod cli;
pub mod output;
pub mod truncate;

pub use truncate::{
    DEFAULT_MARK, MIN_LENGTH, ParsePositionError, Position, Skip, TruncateOptions, Truncation,
    Truncator, inspect_value, truncate, truncate_value,
};
