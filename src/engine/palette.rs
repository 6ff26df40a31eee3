//! Global palette generation and ordered dithering
//!
//! Pass one of the encode accumulates a pixel sample across every kept
//! frame and quantizes it into a single palette for the whole clip; pass
//! two maps each frame through that palette with 4x4 Bayer ordered
//! dithering.

use color_quant::NeuQuant;

use crate::error::{GifClipError, GifClipResult};

/// Upper bound on the pixels fed to the quantizer per clip; frames are
/// stride-subsampled to stay under it.
pub const MAX_PALETTE_SAMPLES: usize = 1 << 18;

/// NeuQuant sampling factor (1 = exhaustive, 30 = fastest)
const QUANT_SAMPLE_FACTOR: i32 = 10;

/// Amplitude of the Bayer threshold offset in 8-bit channel units
const DITHER_SPREAD: f64 = 24.0;

/// 4x4 Bayer matrix, normalized to centered thresholds
const BAYER_4X4: [[f64; 4]; 4] = [
    [0.0, 8.0, 2.0, 10.0],
    [12.0, 4.0, 14.0, 6.0],
    [3.0, 11.0, 1.0, 9.0],
    [15.0, 7.0, 13.0, 5.0],
];

/// Accumulates subsampled pixels over the palette pass
pub struct PaletteBuilder {
    samples: Vec<u8>,
    frames: u32,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            frames: 0,
        }
    }

    /// Add a packed RGB24 frame, keeping every `stride`-th pixel
    pub fn add_frame(&mut self, rgb: &[u8], stride: usize) {
        let stride = stride.max(1);
        for px in rgb.chunks_exact(3).step_by(stride) {
            self.samples.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        self.frames += 1;
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Quantize the accumulated sample into a fixed-size palette
    pub fn build(&self, color_count: u16) -> GifClipResult<Palette> {
        if self.samples.is_empty() {
            return Err(GifClipError::TranscodeFailure {
                message: "Palette pass produced no pixel samples".to_string(),
            });
        }
        let colors = usize::from(color_count).clamp(2, 256);
        let quant = NeuQuant::new(QUANT_SAMPLE_FACTOR, colors, &self.samples);
        let rgb = quant.color_map_rgb();
        Ok(Palette { quant, rgb })
    }
}

impl Default for PaletteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed color palette for one clip
pub struct Palette {
    quant: NeuQuant,
    rgb: Vec<u8>,
}

impl Palette {
    /// Palette entries as RGB triplets, for the GIF global color table
    pub fn rgb(&self) -> &[u8] {
        &self.rgb
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.rgb.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.rgb.is_empty()
    }

    /// Map a packed RGB24 frame to palette indices with ordered (Bayer)
    /// dithering.
    pub fn map_frame(&self, rgb: &[u8], width: u32) -> Vec<u8> {
        let width = width.max(1) as usize;
        let mut indices = Vec::with_capacity(rgb.len() / 3);
        for (i, px) in rgb.chunks_exact(3).enumerate() {
            let x = i % width;
            let y = i / width;
            let threshold = (BAYER_4X4[y % 4][x % 4] / 16.0 - 0.5) * DITHER_SPREAD;
            let r = (px[0] as f64 + threshold).clamp(0.0, 255.0) as u8;
            let g = (px[1] as f64 + threshold).clamp(0.0, 255.0) as u8;
            let b = (px[2] as f64 + threshold).clamp(0.0, 255.0) as u8;
            indices.push(self.quant.index_of(&[r, g, b, 255]) as u8);
        }
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(r: u8, g: u8, b: u8, pixels: usize) -> Vec<u8> {
        let mut frame = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            frame.extend_from_slice(&[r, g, b]);
        }
        frame
    }

    #[test]
    fn test_build_requires_samples() {
        let builder = PaletteBuilder::new();
        assert!(builder.build(64).is_err());
    }

    #[test]
    fn test_palette_size_bounded_by_color_count() {
        let mut builder = PaletteBuilder::new();
        builder.add_frame(&solid_frame(200, 30, 30, 64), 1);
        builder.add_frame(&solid_frame(30, 200, 30, 64), 1);
        let palette = builder.build(64).unwrap();
        assert!(palette.len() <= 64);
        assert!(!palette.is_empty());
        assert_eq!(palette.rgb().len() % 3, 0);
    }

    #[test]
    fn test_map_frame_indices_in_range() {
        let mut builder = PaletteBuilder::new();
        builder.add_frame(&solid_frame(10, 20, 30, 256), 1);
        builder.add_frame(&solid_frame(240, 120, 60, 256), 1);
        let palette = builder.build(32).unwrap();

        let frame = solid_frame(10, 20, 30, 16);
        let indices = palette.map_frame(&frame, 4);
        assert_eq!(indices.len(), 16);
        assert!(indices.iter().all(|&i| (i as usize) < palette.len()));
    }

    #[test]
    fn test_subsampling_stride_reduces_samples() {
        let mut dense = PaletteBuilder::new();
        dense.add_frame(&solid_frame(1, 2, 3, 1000), 1);
        let mut sparse = PaletteBuilder::new();
        sparse.add_frame(&solid_frame(1, 2, 3, 1000), 10);
        assert!(sparse.samples.len() < dense.samples.len());
        assert_eq!(sparse.samples.len() % 4, 0);
    }

    #[test]
    fn test_map_frame_reproduces_solid_color() {
        let mut builder = PaletteBuilder::new();
        builder.add_frame(&solid_frame(255, 0, 0, 512), 1);
        let palette = builder.build(16).unwrap();
        let indices = palette.map_frame(&solid_frame(255, 0, 0, 64), 8);
        // A solid red frame maps to an entry close to red
        let idx = indices[0] as usize;
        let entry = &palette.rgb()[idx * 3..idx * 3 + 3];
        assert!(entry[0] > 180);
        assert!(entry[1] < 90);
        assert!(entry[2] < 90);
    }
}
