//! Comparison output for showing one input across marker positions

use owo_colors::{OwoColorize, Stream};
use tabled::{Table, Tabled};

use crate::truncate::{Position, Truncator};

#[derive(Tabled)]
struct PositionRow {
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Result")]
    result: String,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Note")]
    note: String,
}

/// Truncate `input` at each of `positions` and tabulate the results
pub fn compare_positions(
    truncator: &Truncator,
    input: &str,
    length: usize,
    positions: &[Position],
) -> String {
    if positions.is_empty() {
        return "No positions specified.\n".to_string();
    }

    let rows: Vec<PositionRow> = positions
        .iter()
        .map(|&position| {
            let outcome = truncator.clone().with_position(position).apply(input, length);
            PositionRow {
                position: position.to_string(),
                result: outcome.as_str().to_string(),
                length: outcome.as_str().chars().count(),
                note: outcome
                    .reason()
                    .map(|reason| format!("unchanged: {}", reason))
                    .unwrap_or_default(),
            }
        })
        .collect();

    let table = Table::new(rows).to_string();

    format!(
        "Comparing {} at length {}:\n\n{}\n",
        input.if_supports_color(Stream::Stdout, |t| t.bold()),
        length,
        table
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_positions() {
        let output = compare_positions(
            &Truncator::new(),
            "A quick brown fox jumped over the lazy dog",
            26,
            &[Position::Left, Position::Center, Position::Right],
        );

        assert!(output.contains("Position"));
        assert!(output.contains("… jumped over the lazy dog"));
        assert!(output.contains("A quick brown…the lazy dog"));
        assert!(output.contains("A quick brown fox jumped …"));
    }

    #[test]
    fn test_compare_notes_unchanged() {
        let output = compare_positions(&Truncator::new(), "Steve Miller", 11, &[Position::Right]);
        assert!(output.contains("unchanged: length leaves nothing to remove"));
    }

    #[test]
    fn test_compare_no_positions() {
        let output = compare_positions(&Truncator::new(), "Steve Miller", 8, &[]);
        assert_eq!(output, "No positions specified.\n");
    }
}
