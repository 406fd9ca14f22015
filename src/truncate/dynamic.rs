//! Truncation over loosely typed JSON values.
//!
//! Every argument may be any JSON value. Anything that isn't usable hands the
//! input back as-is, whatever its type.

use serde_json::Value;
use tracing::debug;

use super::engine::place;
use super::{DEFAULT_MARK, MIN_LENGTH, Position, Skip};

/// Truncate a JSON value, returning a clone of `input` when it can't be
/// truncated.
///
/// `options` may carry `mark` (string) and `position` (index or
/// `"left"`/`"center"`/`"right"`). A missing or non-object `options` means
/// defaults.
pub fn truncate_value(input: &Value, length: &Value, options: &Value) -> Value {
    match inspect_value(input, length, options) {
        Ok(truncated) => Value::String(truncated),
        Err(_) => input.clone(),
    }
}

/// Like [`truncate_value`], but reports why the input was left alone
pub fn inspect_value(input: &Value, length: &Value, options: &Value) -> Result<String, Skip> {
    let result = try_inspect(input, length, options);
    if let Err(reason) = result {
        debug!(%reason, "value left unchanged");
    }
    result
}

fn try_inspect(input: &Value, length: &Value, options: &Value) -> Result<String, Skip> {
    let mark = match options.get("mark") {
        None => DEFAULT_MARK,
        Some(Value::String(mark)) => mark.as_str(),
        Some(_) => return Err(Skip::MarkNotString),
    };

    let trimmed = input.as_str().ok_or(Skip::NotAString)?.trim();
    let count = trimmed.chars().count();
    if count < MIN_LENGTH {
        return Err(Skip::TooShort);
    }

    // Bounds are checked on the unrounded value, so 4.5 is a valid length
    let raw = match length {
        Value::Number(n) => n.as_f64().ok_or(Skip::LengthNotNumber)?,
        _ => return Err(Skip::LengthNotNumber),
    };
    if raw <= MIN_LENGTH as f64 {
        return Err(Skip::LengthTooSmall);
    }
    if raw >= count.saturating_sub(mark.chars().count()) as f64 {
        return Err(Skip::NothingToRemove);
    }
    let length = raw.trunc() as usize;

    let position = position_from(options.get("position"))?;

    Ok(place(trimmed, count, length, mark, position).0)
}

fn position_from(value: Option<&Value>) -> Result<Position, Skip> {
    match value {
        None | Some(Value::Null) => Ok(Position::default()),
        Some(Value::String(name)) => name.parse().map_err(|_| Skip::UnknownPosition),
        Some(Value::Number(n)) => whole_number(n)
            .map(Position::Index)
            .ok_or(Skip::UnknownPosition),
        Some(_) => Err(Skip::UnknownPosition),
    }
}

/// Non-negative numbers, with fractions dropped. Out-of-range values saturate.
fn whole_number(n: &serde_json::Number) -> Option<usize> {
    if let Some(n) = n.as_u64() {
        return usize::try_from(n).ok();
    }
    n.as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.trunc() as usize)
}
