//! Output formatting for truncation reports

use std::ops::Range;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::truncate::{Skip, Truncation};

/// One input and what became of it
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: String,
    pub output: String,
    pub truncated: bool,
    pub reason: Option<Skip>,
    /// Byte range of the marker within `output`
    #[serde(skip)]
    pub mark: Option<Range<usize>>,
}

impl Report {
    pub fn new(input: &str, outcome: &Truncation<'_>) -> Self {
        Self {
            input: input.to_string(),
            output: outcome.as_str().to_string(),
            truncated: outcome.is_truncated(),
            reason: outcome.reason(),
            mark: outcome.mark_range(),
        }
    }
}

/// Format reports as text, one output per line. With `color`, the marker is
/// highlighted and unchanged inputs are dimmed.
pub fn format_reports(reports: &[Report], color: bool) -> String {
    let mut output = String::new();

    for report in reports {
        match (&report.mark, color) {
            (Some(mark), true) => {
                let text = &report.output;
                output.push_str(&format!(
                    "{}{}{}",
                    &text[..mark.start],
                    (&text[mark.clone()]).yellow().bold(),
                    &text[mark.end..]
                ));
            }
            (None, true) => {
                output.push_str(&format!("{}", report.output.dimmed()));
            }
            (_, false) => output.push_str(&report.output),
        }
        output.push('\n');
    }

    output
}

/// Format reports as JSON
pub fn format_reports_json(reports: &[Report]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}

/// Describe each input that was left unchanged, for stderr
pub fn format_skips(reports: &[Report]) -> String {
    let mut output = String::new();

    for report in reports {
        let Some(reason) = report.reason else {
            continue;
        };
        output.push_str(&format!(
            "{} left unchanged ({}): {}\n",
            "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
            reason,
            report.input.if_supports_color(Stream::Stderr, |t| t.dimmed())
        ));
    }

    output
}
