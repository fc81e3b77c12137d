//! The RGBA frame buffer the pipeline stages read and write.
//!
//! # Memory Layout
//!
//! Frames store pixels in **row-major** order, top-to-bottom, with
//! interleaved channels:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//! ```
//!
//! # Ownership
//!
//! Each pipeline stage borrows one frame read-only and writes a distinct
//! output frame; frames are never aliased within a stage. The orchestrator
//! reuses a small pool of frames by index swapping, so `Frame` itself is a
//! plain owned buffer with no sharing.

use crate::{CoreError, Result, Sample};

/// Number of channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Owned RGBA f32 image buffer.
///
/// # Example
///
/// ```rust
/// use emulsion_core::Frame;
///
/// let mut frame = Frame::filled(10, 10, [0.18, 0.18, 0.18, 1.0]);
/// assert_eq!(frame.pixel(5, 5), [0.18, 0.18, 0.18, 1.0]);
/// frame.fill([0.0; 4]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Frame {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl Frame {
    /// Creates a new frame filled with zeros.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            data: vec![0.0; len],
            width,
            height,
        }
    }

    /// Creates a frame filled with a specific pixel value.
    pub fn filled(width: u32, height: u32, pixel: [f32; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self { data, width, height }
    }

    /// Creates a frame from existing interleaved RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                reason: format!("expected {} elements, got {}", expected, data.len()),
            });
        }
        Ok(Self { data, width, height })
    }

    /// Converts a host buffer of any supported [`Sample`] format into a frame.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] on length mismatch.
    pub fn from_samples<T: Sample>(width: u32, height: u32, samples: &[T]) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if samples.len() != expected {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                reason: format!("expected {} samples, got {}", expected, samples.len()),
            });
        }
        let data = samples.iter().map(|s| s.to_f32()).collect();
        Ok(Self { data, width, height })
    }

    /// Writes the frame contents into a host buffer of any supported format.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDimensions`] on length mismatch.
    pub fn write_samples<T: Sample>(&self, out: &mut [T]) -> Result<()> {
        if out.len() != self.data.len() {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
                reason: format!("expected {} samples, got {}", self.data.len(), out.len()),
            });
        }
        for (dst, &src) in out.iter_mut().zip(&self.data) {
            *dst = T::from_f32(src);
        }
        Ok(())
    }

    /// Returns the frame width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the frame has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw interleaved RGBA data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the raw interleaved RGBA data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Sets the pixel at (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; 4]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        self.data[o..o + CHANNELS].copy_from_slice(&pixel);
    }

    /// Fills the entire frame with a pixel value.
    pub fn fill(&mut self, pixel: [f32; 4]) {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Returns a row of pixels as an interleaved slice.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize * CHANNELS;
        &self.data[start..start + self.width as usize * CHANNELS]
    }

    /// Copies the contents of `src` into this frame.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::SizeMismatch`] if dimensions differ.
    pub fn copy_from(&mut self, src: &Frame) -> Result<()> {
        if self.dimensions() != src.dimensions() {
            return Err(CoreError::SizeMismatch(self.dimensions(), src.dimensions()));
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [f32; 4])> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Applies a function to each pixel in place.
    pub fn map_pixels<F>(&mut self, f: F)
    where
        F: Fn([f32; 4]) -> [f32; 4],
    {
        for chunk in self.data.chunks_exact_mut(CHANNELS) {
            let px = [chunk[0], chunk[1], chunk[2], chunk[3]];
            chunk.copy_from_slice(&f(px));
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_zeroed() {
        let frame = Frame::new(8, 4);
        assert_eq!(frame.dimensions(), (8, 4));
        assert_eq!(frame.pixel(7, 3), [0.0; 4]);
    }

    #[test]
    fn set_get_pixel() {
        let mut frame = Frame::new(10, 10);
        frame.set_pixel(5, 5, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(frame.pixel(5, 5), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(frame.pixel(0, 0), [0.0; 4]);
    }

    #[test]
    fn from_data_wrong_size() {
        assert!(Frame::from_data(10, 10, vec![0.0; 100]).is_err());
    }

    #[test]
    fn copy_from_mismatch() {
        let mut a = Frame::new(10, 10);
        let b = Frame::new(5, 5);
        assert!(a.copy_from(&b).is_err());
    }

    #[test]
    fn sample_ingress_egress() {
        let bytes = vec![255u8; 2 * 2 * 4];
        let frame = Frame::from_samples(2, 2, &bytes).unwrap();
        assert_eq!(frame.pixel(1, 1), [1.0; 4]);

        let mut out = vec![0u8; 2 * 2 * 4];
        frame.write_samples(&mut out).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn map_pixels_doubles() {
        let mut frame = Frame::filled(4, 4, [0.25, 0.25, 0.25, 1.0]);
        frame.map_pixels(|px| [px[0] * 2.0, px[1] * 2.0, px[2] * 2.0, px[3]]);
        assert_eq!(frame.pixel(0, 0), [0.5, 0.5, 0.5, 1.0]);
    }
}
