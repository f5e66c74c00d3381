use std::path::PathBuf;

use clap::Parser;

use rummy_replay::config::{ReplayConfig, ResolvedOutputs};
use rummy_replay::logging::init_logging;
use rummy_replay::runner::ReplayRunner;

/// Replays scripted operations against meld slots.
#[derive(Debug, Parser)]
#[command(
    name = "rummy-replay",
    author,
    version,
    about = "Deterministic meld slot replay harness"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "replay/replay.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Exit after validating the configuration (no steps are replayed).
    #[arg(long)]
    validate_only: bool,

    /// Override the tracing level and force structured logging on.
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = ReplayConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(level) = cli.log_level {
        config.logging.enable_structured = true;
        config.logging.tracing_level = level;
    }

    config.validate()?;

    let outputs: ResolvedOutputs = config.resolved_outputs();
    let slot_count = config.slots.len();
    let step_count = config.step_count();
    let run_id = config.run_id.clone();

    println!(
        "Loaded configuration '{run_id}' with {slot_count} slot{} ({step_count} steps)",
        if slot_count == 1 { "" } else { "s" }
    );

    if cli.validate_only {
        println!("Validation-only mode: replay skipped.");
        return Ok(());
    }

    let _logging_guard = init_logging(&config.logging, &outputs)?;
    let runner = ReplayRunner::new(config, outputs);

    let summary = runner.run()?;
    println!(
        "Replay complete for '{run_id}': {} slots → {} rows at {}",
        summary.slots,
        summary.rows_written,
        summary.jsonl_path.display()
    );
    if summary.diagnostics > 0 {
        println!("Diagnostics reported: {}", summary.diagnostics);
    }
    if let Some(telemetry_path) = summary.telemetry_path.as_ref() {
        println!("Telemetry log: {}", telemetry_path.display());
    }

    Ok(())
}
