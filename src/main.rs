use anyhow::{Context, Result};
use clap::Parser;
use snake3d::game::GameConfig;
use snake3d::modes::{HumanMode, HumanOptions};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake3d")]
#[command(version, about = "Snake in a cube, played in the terminal")]
struct Cli {
    /// YAML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second; the simulation ticks once per frame
    #[arg(long, default_value = "30")]
    fps: u32,

    /// Seed for coin placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Half the edge length of the cube, overriding the config file
    #[arg(long)]
    half_extent: Option<i32>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_tracing(path: &Path, default_filter: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path, &cli.log_level)?;
    }

    // Create game configuration from the config file and CLI overrides
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(half_extent) = cli.half_extent {
        config.half_extent = half_extent;
    }
    tracing::info!(?config, "starting");

    let options = HumanOptions {
        fps: cli.fps,
        seed: cli.seed,
    };
    let mut human_mode = HumanMode::new(config, options)?;
    human_mode.run().await?;

    Ok(())
}
