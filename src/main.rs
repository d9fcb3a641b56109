// Main entry point - Wiring, argument handling and exit status
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::io::Write;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::application::fleet_evaluator::evaluate_fleet;
use crate::application::fleet_source::FleetSource;
use crate::infrastructure::config::{load_app_config, OutputFormat};
use crate::infrastructure::file_source::FileFleetSource;
use crate::presentation::report_writer::write_results;

/// Printed on stdout for every failure; the cause goes to the log on stderr.
const FAILURE_SIGNAL: &str = "ERROR";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Load configuration
    let app_config = load_app_config();
    let log_level = app_config
        .as_ref()
        .map(|config| config.logging.level.as_str())
        .unwrap_or("warn");
    init_tracing(log_level);

    let result = app_config.and_then(|config| {
        let source = FileFleetSource::new(input_path(&args)?);
        run(&source, &mut std::io::stdout().lock(), config.output.format)
    });

    ExitCode::from(report(result, &mut std::io::stdout().lock()))
}

/// Map the outcome to a process exit status, writing the failure signal to
/// `out` on error.
fn report<W: Write>(result: anyhow::Result<()>, out: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{:#}", e);
            if let Err(write_err) = writeln!(out, "{}", FAILURE_SIGNAL).and_then(|()| out.flush()) {
                tracing::error!("Failed to write failure signal: {}", write_err);
            }
            1
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn input_path(args: &[String]) -> anyhow::Result<&str> {
    match args {
        [path] => Ok(path.as_str()),
        _ => anyhow::bail!("expected exactly one argument (input file), got {}", args.len()),
    }
}

fn run<S, W>(source: &S, out: &mut W, format: OutputFormat) -> anyhow::Result<()>
where
    S: FleetSource,
    W: Write,
{
    let fleet = source.load_fleet()?;
    let results = evaluate_fleet(&fleet);
    write_results(out, &results, format)
}
