use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::truncate::{DEFAULT_MARK, Position};

#[derive(Parser, Debug)]
#[command(name = "smart-truncate")]
#[command(
    author,
    version,
    about = "Truncate text to a length with a positioned ellipsis"
)]
#[command(
    long_about = "Shortens each input to the requested length by replacing one run of \
    characters with a marker. The marker can sit at the start, the middle, the end, \
    or at any character index of the result. Inputs that can't be shortened are \
    printed unchanged."
)]
pub struct Args {
    /// Text to truncate (one result per argument; reads stdin lines if omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Target length in characters
    #[arg(short, long)]
    pub length: usize,

    /// Where the marker goes: left, center, right, or a zero-based index
    #[arg(short, long, default_value = "right")]
    pub position: Position,

    /// Marker that replaces the removed characters
    #[arg(short, long, default_value = DEFAULT_MARK)]
    pub mark: String,

    /// Read inputs from a file, one per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Compare results across positions (comma-separated)
    #[arg(short = 'C', long, value_delimiter = ',')]
    pub compare: Option<Vec<Position>>,

    /// Exit with status 2 if any input was left unchanged
    #[arg(long)]
    pub strict: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if !self.text.is_empty() && self.input.is_some() {
            return Err("TEXT arguments cannot be combined with --input".to_string());
        }

        if self.compare.is_some() && matches!(self.format, OutputFormat::Json) {
            return Err("--compare cannot be used with --format json".to_string());
        }

        if self.compare.is_some() && self.strict {
            return Err("--compare cannot be used with --strict".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("smart-truncate").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["-l", "8", "Steve Miller"]);
        assert_eq!(args.length, 8);
        assert_eq!(args.position, Position::Right);
        assert_eq!(args.mark, "…");
        assert_eq!(args.text, vec!["Steve Miller".to_string()]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_position_values() {
        assert_eq!(parse(&["-l", "8", "-p", "4"]).position, Position::Index(4));
        assert_eq!(
            parse(&["-l", "8", "--position", "center"]).position,
            Position::Center
        );
        assert!(
            Args::try_parse_from(["smart-truncate", "-l", "8", "-p", "middle"]).is_err()
        );
    }

    #[test]
    fn test_compare_list() {
        let args = parse(&["-l", "8", "-C", "left,3,right"]);
        assert_eq!(
            args.compare,
            Some(vec![Position::Left, Position::Index(3), Position::Right])
        );
    }

    #[test]
    fn test_length_required() {
        assert!(Args::try_parse_from(["smart-truncate", "Steve Miller"]).is_err());
    }

    #[test]
    fn test_validate_conflicts() {
        assert!(parse(&["-l", "8", "-i", "names.txt", "Steve"]).validate().is_err());
        assert!(
            parse(&["-l", "8", "-C", "left", "--format", "json"])
                .validate()
                .is_err()
        );
        assert!(parse(&["-l", "8", "-C", "left", "--strict"]).validate().is_err());
        assert!(parse(&["-l", "8", "-i", "names.txt"]).validate().is_ok());
    }
}
