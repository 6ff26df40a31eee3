//! CLI module for GifClip
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// GifClip
///
/// Cut a time range out of a video and convert it into a size-budgeted
/// animated GIF using a two-pass palette-quantized encode.
#[derive(Parser)]
#[command(name = "gifclip")]
#[command(about = "GifClip - video range to size-budgeted GIF")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Path to an optional gifclip.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Transcode a time range of a video into a GIF
    Clip(args::ClipArgs),
    /// Inspect video file information
    Inspect(args::InspectArgs),
    /// Predict the output size for a parameter set without encoding
    Estimate(args::EstimateArgs),
}
