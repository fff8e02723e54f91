use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use runverdict::input::load_runs;
use runverdict::logging::init_logging;
use runverdict::model::metrics::MetricKind;
use runverdict::model::thresholds::color_token;
use runverdict::model::verdict::{Verdict, VerdictProfile};
use runverdict::pipeline::stage2_format::format;
use runverdict::pipeline::stage4_report::{OutputFormat, build_reports, render, write_rendered};
use runverdict::report::worst_verdict;

/// Exit status when `--fail-on` trips.
const EXIT_GATE: i32 = 2;

/// Normalize test run summaries and classify them as Passed, Warning or Failed.
#[derive(Debug, Parser)]
#[command(name = "runverdict", version, about)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one run container or an array of them
    Evaluate {
        /// JSON document, optionally gzipped (.gz)
        #[arg(long)]
        input: PathBuf,
        /// JSON file overriding verdict limits
        #[arg(long)]
        profile: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Exit with status 2 when any run reaches this verdict
        #[arg(long, value_enum)]
        fail_on: Option<FailOn>,
    },
    /// Format a single raw metric value for display
    Format {
        #[arg(long, value_enum)]
        metric: MetricKind,
        /// Raw value; omit for "no data"
        #[arg(long, allow_negative_numbers = true)]
        value: Option<f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FailOn {
    Warning,
    Failed,
}

impl FailOn {
    fn verdict(self) -> Verdict {
        match self {
            FailOn::Warning => Verdict::Warning,
            FailOn::Failed => Verdict::Failed,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32, String> {
    match cli.command {
        Command::Evaluate {
            input,
            profile,
            output,
            out,
            fail_on,
        } => {
            let profile = match profile {
                Some(path) => VerdictProfile::load(&path).map_err(|e| e.to_string())?,
                None => VerdictProfile::default_v1(),
            };
            let runs = load_runs(&input).map_err(|e| e.to_string())?;
            let reports = build_reports(&runs, &profile);
            let rendered = render(&reports, output).map_err(|e| e.to_string())?;
            write_rendered(&rendered, out.as_deref()).map_err(|e| e.to_string())?;

            let worst = worst_verdict(&reports);
            if gate_tripped(worst, fail_on) {
                info!(
                    worst = worst.map(Verdict::label).unwrap_or("none"),
                    "fail-on gate tripped"
                );
                return Ok(EXIT_GATE);
            }
            Ok(0)
        }
        Command::Format { metric, value } => {
            let formatted = format(metric, value);
            println!(
                "{}\t{}\t{}",
                formatted.display(),
                formatted.band.unwrap_or("-"),
                color_token(formatted.color)
            );
            Ok(0)
        }
    }
}

fn gate_tripped(worst: Option<Verdict>, fail_on: Option<FailOn>) -> bool {
    match (worst, fail_on) {
        (Some(worst), Some(level)) => worst >= level.verdict(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
