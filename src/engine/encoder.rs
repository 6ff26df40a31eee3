//! GIF container writing
//!
//! Streams palette-indexed frames into an in-memory GIF with a global
//! color table and infinite looping.

use std::borrow::Cow;

use gif::{Encoder, Frame, Repeat};

use crate::error::{GifClipError, GifClipResult};

/// Hundredths-of-a-second frame delay bounds imposed by the container
const MIN_DELAY_CS: f64 = 2.0;
const MAX_DELAY_CS: f64 = 100.0;

/// Streaming writer for one GIF artifact. Dropping the writer finalizes
/// the container trailer into the backing buffer.
pub struct GifWriter<'a> {
    encoder: Encoder<&'a mut Vec<u8>>,
    width: u16,
    height: u16,
    delay: u16,
    frames: u32,
}

impl<'a> GifWriter<'a> {
    /// Start a GIF with the given dimensions, frame rate, and global
    /// palette (RGB triplets).
    pub fn new(
        buffer: &'a mut Vec<u8>,
        width: u32,
        height: u32,
        fps: u32,
        palette: &[u8],
    ) -> GifClipResult<Self> {
        if width == 0 || height == 0 {
            return Err(GifClipError::TranscodeFailure {
                message: "Output has zero dimension".to_string(),
            });
        }
        if width > u16::MAX as u32 || height > u16::MAX as u32 {
            return Err(GifClipError::TranscodeFailure {
                message: format!("Output dimensions {}x{} too large for GIF", width, height),
            });
        }

        let width = width as u16;
        let height = height as u16;
        let mut encoder = Encoder::new(buffer, width, height, palette)?;
        encoder.set_repeat(Repeat::Infinite)?;

        let fps = fps.max(1);
        let delay = (MAX_DELAY_CS / fps as f64).clamp(MIN_DELAY_CS, MAX_DELAY_CS) as u16;

        Ok(Self {
            encoder,
            width,
            height,
            delay,
            frames: 0,
        })
    }

    /// Append one frame of palette indices (row-major, one byte per pixel)
    pub fn write_indexed_frame(&mut self, indices: &[u8]) -> GifClipResult<()> {
        let expected = self.width as usize * self.height as usize;
        if indices.len() != expected {
            return Err(GifClipError::TranscodeFailure {
                message: format!(
                    "Frame index buffer has {} entries, expected {}",
                    indices.len(),
                    expected
                ),
            });
        }

        let mut frame = Frame::default();
        frame.width = self.width;
        frame.height = self.height;
        frame.buffer = Cow::Borrowed(indices);
        frame.delay = self.delay;
        self.encoder.write_frame(&frame)?;
        self.frames += 1;
        Ok(())
    }

    /// Frames written so far
    pub fn frame_count(&self) -> u32 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey_palette() -> Vec<u8> {
        let mut p = Vec::new();
        for i in 0..16u8 {
            let v = i * 17;
            p.extend_from_slice(&[v, v, v]);
        }
        p
    }

    #[test]
    fn test_writes_gif_header_and_frames() {
        let mut buffer = Vec::new();
        {
            let mut writer = GifWriter::new(&mut buffer, 4, 4, 10, &grey_palette()).unwrap();
            for _ in 0..3 {
                writer.write_indexed_frame(&[0u8; 16]).unwrap();
            }
            assert_eq!(writer.frame_count(), 3);
        }
        assert!(!buffer.is_empty());
        assert_eq!(&buffer[0..6], b"GIF89a");
    }

    #[test]
    fn test_delay_clamped() {
        let mut buffer = Vec::new();
        // 1 fps would be 100cs; 60 fps would clamp up to the 2cs floor
        let writer = GifWriter::new(&mut buffer, 2, 2, 60, &grey_palette()).unwrap();
        assert_eq!(writer.delay, 2);
        drop(writer);

        let mut buffer = Vec::new();
        let writer = GifWriter::new(&mut buffer, 2, 2, 1, &grey_palette()).unwrap();
        assert_eq!(writer.delay, 100);
    }

    #[test]
    fn test_rejects_zero_dimension() {
        let mut buffer = Vec::new();
        assert!(GifWriter::new(&mut buffer, 0, 4, 10, &grey_palette()).is_err());
    }

    #[test]
    fn test_rejects_wrong_buffer_size() {
        let mut buffer = Vec::new();
        let mut writer = GifWriter::new(&mut buffer, 4, 4, 10, &grey_palette()).unwrap();
        assert!(writer.write_indexed_frame(&[0u8; 15]).is_err());
    }
}
