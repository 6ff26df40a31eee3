// Unit tests for domain models

#[cfg(test)]
mod tests {
    use crate::domain::model::*;

    #[test]
    fn test_selection_creation() {
        let sel = Selection::new(10.0, 20.0).unwrap();
        assert_eq!(sel.start, 10.0);
        assert_eq!(sel.end, 20.0);
        assert_eq!(sel.span(), 10.0);
    }

    #[test]
    fn test_selection_invalid() {
        assert!(Selection::new(10.0, 5.0).is_err()); // End before start
        assert!(Selection::new(-1.0, 10.0).is_err()); // Negative start
        assert!(Selection::new(f64::NAN, 10.0).is_err());
        assert!(Selection::new(0.0, f64::INFINITY).is_err());
        assert!(Selection::new(5.0, 5.0).is_err()); // Zero span
    }

    #[test]
    fn test_selection_clamped_within_duration() {
        let sel = Selection::clamped(10.0, 50.0, 120.0, 30.0);
        assert_eq!(sel.start, 10.0);
        assert_eq!(sel.end, 40.0); // span capped at 30
        assert!(sel.span() <= 30.0);
    }

    #[test]
    fn test_selection_clamped_exceeds_duration() {
        let sel = Selection::clamped(110.0, 140.0, 120.0, 30.0);
        assert!(sel.start >= 0.0);
        assert!(sel.start < sel.end);
        assert!(sel.end <= 120.0);
    }

    #[test]
    fn test_selection_clamped_negative_start() {
        let sel = Selection::clamped(-5.0, 3.0, 120.0, 30.0);
        assert_eq!(sel.start, 0.0);
        assert_eq!(sel.end, 3.0);
    }

    #[test]
    fn test_selection_clamp_invariant_holds() {
        // For any requested (start, end) the clamped result satisfies
        // 0 <= start < end <= duration and span <= max.
        let duration = 120.0;
        let max_span = 10.0;
        let cases = [
            (0.0, 120.0),
            (119.95, 200.0),
            (-20.0, -1.0),
            (60.0, 60.0),
            (30.0, 29.0),
        ];
        for (s, e) in cases {
            let sel = Selection::clamped(s, e, duration, max_span);
            assert!(sel.start >= 0.0, "start >= 0 for ({}, {})", s, e);
            assert!(sel.start < sel.end, "start < end for ({}, {})", s, e);
            assert!(sel.end <= duration, "end <= duration for ({}, {})", s, e);
            assert!(
                sel.span() <= max_span + 1e-9,
                "span <= max for ({}, {})",
                s,
                e
            );
        }
    }

    #[test]
    fn test_selection_validate_against_duration() {
        let sel = Selection::new(10.0, 20.0).unwrap();
        assert!(sel.validate_against_duration(30.0).is_ok());
        assert!(sel.validate_against_duration(15.0).is_err());
    }

    #[test]
    fn test_viewport_full() {
        let vp = ViewportWindow::full();
        assert_eq!(vp.view_start, 0.0);
        assert_eq!(vp.view_end, 1.0);
        assert_eq!(vp.width(), 1.0);
        assert_eq!(vp.zoom_level(), 1.0);
    }

    #[test]
    fn test_viewport_from_bounds_clamps() {
        let vp = ViewportWindow::from_bounds(-0.5, 1.5);
        assert_eq!(vp.view_start, 0.0);
        assert_eq!(vp.view_end, 1.0);

        let vp = ViewportWindow::from_bounds(0.25, 0.75);
        assert_eq!(vp.width(), 0.5);
        assert!((vp.zoom_level() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_metadata_known() {
        let mut meta = VideoMetadata {
            duration: 12.5,
            width: 1920,
            height: 1080,
            frame_rate: 30.0,
            codec: "h264".to_string(),
            pixel_format: Some("yuv420p".to_string()),
        };
        assert!(meta.is_known());

        meta.duration = f64::NAN;
        assert!(!meta.is_known());
        meta.duration = f64::INFINITY;
        assert!(!meta.is_known());
        meta.duration = 0.0;
        assert!(!meta.is_known());
        meta.duration = -3.0;
        assert!(!meta.is_known());
    }

    #[test]
    fn test_quality_tier_color_counts() {
        assert_eq!(QualityTier::Low.color_count(), 64);
        assert_eq!(QualityTier::Medium.color_count(), 128);
        assert_eq!(QualityTier::High.color_count(), 256);
    }

    #[test]
    fn test_quality_tier_bits_per_pixel_ordering() {
        assert!(QualityTier::Low.bits_per_pixel() < QualityTier::Medium.bits_per_pixel());
        assert!(QualityTier::Medium.bits_per_pixel() < QualityTier::High.bits_per_pixel());
    }

    #[test]
    fn test_quality_tier_parse() {
        assert_eq!(QualityTier::parse("low").unwrap(), QualityTier::Low);
        assert_eq!(QualityTier::parse("HIGH").unwrap(), QualityTier::High);
        assert!(QualityTier::parse("ultra").is_err());
    }

    #[test]
    fn test_frame_rate_parse() {
        assert_eq!(FrameRate::parse("8").unwrap(), FrameRate::F8);
        assert_eq!(FrameRate::parse("15").unwrap().as_u32(), 15);
        assert!(FrameRate::parse("24").is_err()); // Not in the closed set
        assert!(FrameRate::parse("9").is_err());
    }

    #[test]
    fn test_scale_preset_max_widths() {
        assert_eq!(ScalePreset::Original.max_width(), None);
        assert_eq!(ScalePreset::P720.max_width(), Some(1280));
        assert_eq!(ScalePreset::P480.max_width(), Some(854));
        assert_eq!(ScalePreset::P360.max_width(), Some(640));
        assert_eq!(ScalePreset::P240.max_width(), Some(426));
    }

    #[test]
    fn test_scale_preset_apply_caps_and_evens() {
        let (w, h) = ScalePreset::P480.apply(1920, 1080);
        assert_eq!(w, 854);
        assert_eq!(h, 480); // 1080 * 854 / 1920 = 480.375 -> 480 even
        assert_eq!(w % 2, 0);
        assert_eq!(h % 2, 0);
    }

    #[test]
    fn test_scale_preset_apply_no_upscale() {
        // Sources narrower than the cap keep their dimensions
        let (w, h) = ScalePreset::P720.apply(640, 360);
        assert_eq!((w, h), (640, 360));
    }

    #[test]
    fn test_scale_preset_apply_odd_source() {
        let (w, h) = ScalePreset::Original.apply(641, 361);
        assert_eq!(w % 2, 0);
        assert_eq!(h % 2, 0);
    }

    #[test]
    fn test_encoding_profile_default() {
        let profile = EncodingProfile::default();
        assert_eq!(profile.quality, QualityTier::High);
        assert_eq!(profile.fps, FrameRate::F15);
        assert_eq!(profile.scale, ScalePreset::Original);
    }

    #[test]
    fn test_transcode_result_size() {
        let result = TranscodeResult {
            bytes: vec![0u8; 1024],
            content_type: "image/gif",
            width: 100,
            height: 100,
            frame_count: 30,
            over_budget: false,
        };
        assert_eq!(result.size(), 1024);
    }
}
