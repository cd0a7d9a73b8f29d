//! Replay order scripts through the matching engine.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use engine_cli::{replay, run_demo, Config};
use engine_core::{EngineConfig, MatchingEngine};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(name = "engine-cli")]
#[clap(about = "Replay CSV order scripts through the matching engine")]
struct Cli {
    /// Script to replay; reads stdin when omitted
    script: Option<PathBuf>,

    /// Run the built-in demo book instead of a script
    #[clap(long, conflicts_with = "script")]
    demo: bool,

    /// TOML config file
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Enable every strict check
    #[clap(short, long)]
    strict: bool,

    /// Enable debug logging
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(path) = &cli.config {
        config.load_file(path)?;
    }
    if cli.strict {
        config.engine = EngineConfig::strict();
    }
    if cli.debug {
        config.log_level = "debug".to_string();
    }

    init_logging(&config.log_level);
    info!(?config, "starting engine-cli");

    let mut engine = MatchingEngine::with_config(config.engine);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = if cli.demo {
        run_demo(&mut engine, &mut out)?
    } else if let Some(path) = &cli.script {
        let file =
            File::open(path).with_context(|| format!("opening script {}", path.display()))?;
        replay(&mut engine, BufReader::new(file), &mut out)?
    } else {
        replay(&mut engine, io::stdin().lock(), &mut out)?
    };

    info!(live_orders = engine.orders().len(), ?stats, "done");
    Ok(())
}

/// Logs go to stderr so stdout carries only engine output.
/// `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
