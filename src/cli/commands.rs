//! Command execution

use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use tracing::info;

use crate::adapters::FsUploadAdapter;
use crate::cli::args::{ClipArgs, EstimateArgs, InspectArgs};
use crate::config::AppConfig;
use crate::domain::model::{
    duration_is_known, EncodingProfile, FrameRate, QualityTier, ScalePreset, Selection,
};
use crate::engine::{effective_duration, TranscodeEngine, TranscodeObserver, TranscodeRuntime};
use crate::estimator::SizeEstimator;
use crate::ports::{ArtifactMetadata, UploadGateway};
use crate::probe::MediaProber;
use crate::utils::time::parse_time;
use crate::VideoSource;

/// Progress printer for interactive runs
struct ConsoleProgressObserver {
    last_percent: Mutex<i64>,
}

impl ConsoleProgressObserver {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            last_percent: Mutex::new(-1),
        })
    }
}

impl TranscodeObserver for ConsoleProgressObserver {
    fn on_progress(&self, ratio: f64) {
        let percent = (ratio * 100.0) as i64;
        let mut last = self.last_percent.lock().unwrap_or_else(|e| e.into_inner());
        if percent / 5 > *last / 5 || percent == 100 {
            *last = percent;
            println!("  transcoding... {:>3}%", percent);
        }
    }
}

fn parse_profile(quality: &str, fps: &str, scale: &str) -> Result<EncodingProfile> {
    Ok(EncodingProfile {
        quality: QualityTier::parse(quality).map_err(|e| anyhow!("{}", e))?,
        fps: FrameRate::parse(fps).map_err(|e| anyhow!("{}", e))?,
        scale: ScalePreset::parse(scale).map_err(|e| anyhow!("{}", e))?,
    })
}

/// Execute the clip command: probe, clamp, transcode, store
pub async fn execute_clip(args: ClipArgs, config: AppConfig) -> Result<()> {
    let profile = parse_profile(&args.quality, &args.fps, &args.scale)?;
    let start = parse_time(&args.start)?;
    let end = parse_time(&args.end)?;

    let runtime = TranscodeRuntime::new();
    let prober = MediaProber::new(runtime.clone());
    let engine = TranscodeEngine::new(runtime)
        .with_estimator(SizeEstimator::new().with_budget(config.size_budget_bytes));

    let mut source = VideoSource::from_path(&args.input)?;
    let metadata = prober.probe(&source).await?;
    if !metadata.is_known() {
        return Err(anyhow!(
            "Source reports no usable duration; cannot clamp the requested range"
        ));
    }
    source.set_metadata(metadata.clone());

    let selection = Selection::clamped(start, end, metadata.duration, config.max_gif_duration);
    info!(
        "Requested [{:.3}s, {:.3}s], clamped to {}",
        start, end, selection
    );

    let estimate = engine_estimate(&config, &metadata, &selection, &profile);
    println!(
        "Predicted size: {} (budget {})",
        format_size(estimate),
        format_size(config.size_budget_bytes)
    );

    let result = engine
        .transcode_observed(&source, selection, profile, ConsoleProgressObserver::new())
        .await?;

    println!(
        "Encoded {} frames at {}x{}, {}",
        result.frame_count,
        result.width,
        result.height,
        format_size(result.size())
    );
    if result.over_budget {
        println!(
            "Note: artifact exceeds the {} budget even after the fallback re-encode",
            format_size(config.size_budget_bytes)
        );
    }

    let store = FsUploadAdapter::new(args.output_dir.unwrap_or_else(|| ".".into()));
    let artifact_meta = ArtifactMetadata {
        original_name: Path::new(&args.input)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.input.clone()),
        duration: effective_duration(&selection),
        width: result.width,
        height: result.height,
        content_type: result.content_type.to_string(),
    };
    let stored = store.store(&result.bytes, &artifact_meta).await?;
    println!("Stored: {}", stored.location);
    Ok(())
}

/// Execute the inspect command
pub async fn execute_inspect(args: InspectArgs) -> Result<()> {
    let runtime = TranscodeRuntime::new();
    let prober = MediaProber::new(runtime);
    let source = VideoSource::from_path(&args.input)?;
    let metadata = prober.probe(&source).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    println!("File:       {}", args.input);
    if duration_is_known(metadata.duration) {
        println!("Duration:   {:.3}s", metadata.duration);
    } else {
        println!("Duration:   unknown");
    }
    println!("Dimensions: {}x{}", metadata.width, metadata.height);
    println!("Frame rate: {:.2} fps", metadata.frame_rate);
    println!("Codec:      {}", metadata.codec);
    if let Some(pix) = &metadata.pixel_format {
        println!("Pixels:     {}", pix);
    }
    Ok(())
}

/// Execute the estimate command: predict output size without encoding
pub async fn execute_estimate(args: EstimateArgs, config: AppConfig) -> Result<()> {
    let profile = parse_profile(&args.quality, &args.fps, &args.scale)?;
    let start = parse_time(&args.start)?;
    let end = parse_time(&args.end)?;

    let runtime = TranscodeRuntime::new();
    let prober = MediaProber::new(runtime);
    let source = VideoSource::from_path(&args.input)?;
    let metadata = prober.probe(&source).await?;
    if !metadata.is_known() {
        return Err(anyhow!("Source reports no usable duration"));
    }

    let selection = Selection::clamped(start, end, metadata.duration, config.max_gif_duration);
    let predicted = engine_estimate(&config, &metadata, &selection, &profile);
    let within = predicted <= config.size_budget_bytes;

    if args.json {
        let report = serde_json::json!({
            "start": selection.start,
            "end": selection.end,
            "effective_duration": effective_duration(&selection),
            "predicted_bytes": predicted,
            "budget_bytes": config.size_budget_bytes,
            "within_budget": within,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Range:     {}", selection);
    println!("Predicted: {}", format_size(predicted));
    println!("Budget:    {}", format_size(config.size_budget_bytes));
    println!(
        "Verdict:   {}",
        if within {
            "within budget"
        } else {
            "over budget (fallback re-encode likely)"
        }
    );
    Ok(())
}

fn engine_estimate(
    config: &AppConfig,
    metadata: &crate::domain::model::VideoMetadata,
    selection: &Selection,
    profile: &EncodingProfile,
) -> u64 {
    SizeEstimator::new()
        .with_budget(config.size_budget_bytes)
        .estimate(
            metadata.width,
            metadata.height,
            effective_duration(selection),
            profile,
        )
        .predicted_bytes
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1}MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{}KB", bytes / 1024)
    }
}
