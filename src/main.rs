//! GifClip CLI
//!
//! Cut a time range out of a video and convert it into a size-budgeted
//! animated GIF.
//!
//! # Usage
//!
//! ```bash
//! gifclip clip --input video.mp4 --start 00:00:10 --end 00:00:13 --quality high --fps 15 --scale 480
//! gifclip inspect --input video.mp4
//! gifclip estimate --input video.mp4 --start 10 --end 13 --scale 480
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use gifclip::cli::{commands, Cli, Commands};
use gifclip::config::AppConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| "gifclip.toml".into());
    let config = AppConfig::load(&config_path)?;

    match cli.command {
        Commands::Clip(args) => {
            info!("Executing clip command");
            commands::execute_clip(args, config).await?;
        }
        Commands::Inspect(args) => {
            info!("Executing inspect command");
            commands::execute_inspect(args).await?;
        }
        Commands::Estimate(args) => {
            info!("Executing estimate command");
            commands::execute_estimate(args, config).await?;
        }
    }

    Ok(())
}
