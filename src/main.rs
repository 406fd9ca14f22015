use std::io::{self, BufRead, IsTerminal};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use smart_truncate::cli::{Args, OutputFormat};
use smart_truncate::output::{
    Report, compare_positions, format_reports, format_reports_json, format_skips,
};
use smart_truncate::{TruncateOptions, Truncator};

fn main() {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    init_tracing(args.verbose);

    let inputs = match read_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(count = inputs.len(), length = args.length, "read inputs");

    let options = TruncateOptions::new()
        .with_mark(args.mark.clone())
        .with_position(args.position);
    let truncator = Truncator::new().with_options(options);

    if let Some(ref positions) = args.compare {
        for input in &inputs {
            print!(
                "{}",
                compare_positions(&truncator, input, args.length, positions)
            );
        }
        return;
    }

    let reports: Vec<Report> = inputs
        .iter()
        .map(|input| Report::new(input, &truncator.apply(input, args.length)))
        .collect();

    match args.format {
        OutputFormat::Text => {
            print!("{}", format_reports(&reports, io::stdout().is_terminal()));
        }
        OutputFormat::Json => {
            println!("{}", format_reports_json(&reports));
        }
    }

    if args.strict && reports.iter().any(|r| !r.truncated) {
        eprint!("{}", format_skips(&reports));
        std::process::exit(2);
    }
}

/// Log to stderr; RUST_LOG overrides the level picked by --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Collect inputs from TEXT arguments, --input, or stdin, in that order
fn read_inputs(args: &Args) -> io::Result<Vec<String>> {
    if !args.text.is_empty() {
        return Ok(args.text.clone());
    }

    if let Some(ref path) = args.input {
        let content = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("failed to read {}: {}", path.display(), e))
        })?;
        return Ok(content.lines().map(str::to_string).collect());
    }

    io::stdin().lock().lines().collect()
}
