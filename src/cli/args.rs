//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the clip command
#[derive(Args, Debug)]
pub struct ClipArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Start time (HH:MM:SS.ms, MM:SS.ms, or seconds)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM:SS.ms, MM:SS.ms, or seconds)
    #[arg(short, long)]
    pub end: String,

    /// Quality tier (low, medium, high)
    #[arg(long, default_value = "high")]
    pub quality: String,

    /// Output frame rate (8, 10, 12, 15)
    #[arg(long, default_value = "15")]
    pub fps: String,

    /// Scale preset (original, 720, 480, 360, 240)
    #[arg(long, default_value = "original")]
    pub scale: String,

    /// Directory the artifact is stored in (default: current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the estimate command
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Input video file path
    #[arg(short, long)]
    pub input: String,

    /// Start time (HH:MM:SS.ms, MM:SS.ms, or seconds)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM:SS.ms, MM:SS.ms, or seconds)
    #[arg(short, long)]
    pub end: String,

    /// Quality tier (low, medium, high)
    #[arg(long, default_value = "high")]
    pub quality: String,

    /// Output frame rate (8, 10, 12, 15)
    #[arg(long, default_value = "15")]
    pub fps: String,

    /// Scale preset (original, 720, 480, 360, 240)
    #[arg(long, default_value = "original")]
    pub scale: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}
