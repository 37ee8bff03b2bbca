// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! aetg CLI: greedy t-way covering array generation.

use aetg_search::config::GeneratorConfig;
use aetg_search::output::{write_suite, write_suite_to_path};
use aetg_search::trials::run_trials;
use aetg_search::AetgResult;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aetg")]
#[command(about = "Generate a t-way covering array with the AETG greedy heuristic")]
#[command(version)]
struct Cli {
    /// Number of factors (k)
    #[arg(short = 'k', long, required_unless_present = "config")]
    factors: Option<usize>,

    /// Levels per factor (v)
    #[arg(short = 'l', long, required_unless_present = "config")]
    levels: Option<usize>,

    /// Interaction strength (t), default 3
    #[arg(short = 't', long)]
    strength: Option<usize>,

    /// Candidates per greedy round (M), default 50
    #[arg(short = 'm', long)]
    candidates: Option<usize>,

    /// Independent trials; the smallest suite is kept
    #[arg(short = 'n', long)]
    trials: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// JSON configuration file; flags given alongside override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file for the best suite (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_config(cli: &Cli) -> AetgResult<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_path(path)?,
        None => GeneratorConfig::new(cli.factors.unwrap_or(0), cli.levels.unwrap_or(0)),
    };
    if let Some(factors) = cli.factors {
        config.factors = factors;
    }
    if let Some(levels) = cli.levels {
        config.levels = levels;
    }
    if let Some(strength) = cli.strength {
        config.strength = strength;
    }
    if let Some(candidates) = cli.candidates {
        config.candidates = candidates;
    }
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> AetgResult<()> {
    let config = build_config(cli)?;
    let summary = run_trials(&config)?;

    match &cli.output {
        Some(path) => write_suite_to_path(path, &summary.best)?,
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_suite(&mut out, &summary.best)?;
            out.flush()?;
        }
    }

    eprintln!(
        "{}-way, {} factors x {} levels: {} tuples",
        config.strength, config.factors, config.levels, summary.universe_size
    );
    eprintln!(
        "{} trial(s): best {}, average {:.2}, worst {}, mean time {:.3?}",
        summary.trials,
        summary.best_size,
        summary.average_size,
        summary.worst_size,
        summary.mean_duration
    );
    eprintln!("{}", summary.statistics);
    Ok(())
}
