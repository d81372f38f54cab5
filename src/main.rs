// src/main.rs
use anyhow::{Context, Result};
use clap::Parser;
use inventory_ts::args::Args;
use inventory_ts::config::Config;
use inventory_ts::{engine, logging, presentation};
use std::process::ExitCode;

const USAGE: &str = "Usage: inventory_ts <path-to-src>";

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::level_for(args.verbose, args.quiet));

    let Ok(config) = Config::try_from(args) else {
        println!("{USAGE}");
        return ExitCode::from(2);
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    let table = engine::run(config)
        .with_context(|| format!("failed to scan {}", config.root.display()))?;
    presentation::write_report(&table, std::io::stdout().lock())
        .context("failed to write report")?;
    Ok(())
}
