use anyhow::Result;
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;

use sinsweep::logging::init_logging;
use sinsweep::{run, RunPaths, SweepSummary};

#[derive(Parser)]
#[command(name = "sinsweep")]
#[command(version)]
#[command(
    about = "Evaluate y(x) = a*sin(x)^2 + b*sin(x) + c over a range",
    long_about = None
)]
struct Cli {
    #[arg(help = "Path to the XML configuration file")]
    config: Option<PathBuf>,

    #[arg(help = "Path to the XML file to write results to")]
    output: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("{} {}", "⚠".yellow(), e);
    }

    match execute(cli) {
        Ok(summary) => {
            println!(
                "{} Wrote {} results to {}",
                "✓".green(),
                summary.pairs,
                summary.results_path.display().to_string().cyan()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<SweepSummary> {
    let paths = resolve_paths(cli.config, cli.output);
    let summary = run(&paths.config, &paths.results)?;
    Ok(summary)
}

/// Both paths or neither: a lone argument is ignored in favour of defaults.
fn resolve_paths(config: Option<PathBuf>, output: Option<PathBuf>) -> RunPaths {
    let ignored = config.clone().or_else(|| output.clone());

    match RunPaths::from_args(config, output) {
        Some(paths) => paths,
        None => {
            if let Some(ignored) = ignored {
                tracing::warn!(
                    argument = %ignored.display(),
                    "Only one path given; both are required, ignoring it"
                );
            }
            println!("Running with default parameters");
            RunPaths::defaults()
        }
    }
}
