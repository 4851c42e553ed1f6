use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use choreo_core::ChoreoConfig;

mod commands;

#[derive(Parser)]
#[command(name = "choreo")]
#[command(author, version, about = "Scroll choreography engine with a terminal preview")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the terminal preview
    Run,
    /// Print the per-section animation state at one scroll offset
    Sample {
        /// Scroll offset in px
        #[arg(short = 'y', long, default_value_t = 0.0)]
        offset: f64,
        /// Viewport width in px
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// Viewport height in px
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        /// Compute with reduced motion
        #[arg(long)]
        reduced: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = ChoreoConfig::load()?;
    info!(path = %ChoreoConfig::config_path().display(), "configuration loaded");

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::Sample {
            offset,
            width,
            height,
            reduced,
        }) => commands::sample::run(config, offset, width, height, reduced),
    }
}
