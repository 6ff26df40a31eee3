//! Time parsing and formatting utilities

use crate::error::{GifClipError, GifClipResult};

/// Parse a time string to seconds. Accepts plain seconds (`12.5`),
/// `MM:SS[.ms]`, or `HH:MM:SS[.ms]`.
pub fn parse_time(time_str: &str) -> GifClipResult<f64> {
    let trimmed = time_str.trim();

    if let Ok(seconds) = trimmed.parse::<f64>() {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(GifClipError::InvalidTimeFormat {
                time: time_str.to_string(),
            });
        }
        return Ok(seconds);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    let invalid = || GifClipError::InvalidTimeFormat {
        time: time_str.to_string(),
    };

    match parts.as_slice() {
        [mm, ss] => {
            let minutes: u32 = mm.parse().map_err(|_| invalid())?;
            let seconds: f64 = ss.parse().map_err(|_| invalid())?;
            if seconds >= 60.0 {
                return Err(invalid());
            }
            Ok(minutes as f64 * 60.0 + seconds)
        }
        [hh, mm, ss] => {
            let hours: u32 = hh.parse().map_err(|_| invalid())?;
            let minutes: u32 = mm.parse().map_err(|_| invalid())?;
            let seconds: f64 = ss.parse().map_err(|_| invalid())?;
            if minutes >= 60 || seconds >= 60.0 {
                return Err(invalid());
            }
            Ok(hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds)
        }
        _ => Err(invalid()),
    }
}

/// Format seconds as `H:MM:SS.mmm` (or `M:SS.mmm` under an hour)
pub fn format_hms(seconds: f64) -> String {
    let total = seconds.max(0.0);
    let hours = (total / 3600.0) as u32;
    let minutes = ((total % 3600.0) / 60.0) as u32;
    let secs = total % 60.0;

    if hours > 0 {
        format!("{}:{:02}:{:06.3}", hours, minutes, secs)
    } else {
        format!("{}:{:06.3}", minutes, secs)
    }
}
