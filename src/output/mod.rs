mod compare;
mod report;

pub use compare::compare_positions;
pub use report::{Report, format_reports, format_reports_json, format_skips};
