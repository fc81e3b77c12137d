//! 3-dimensional lookup table.

use crate::{LutError, LutResult};

/// A 3D color lookup table.
///
/// `size^3` RGB entries stored R-fastest (R varies quickest, then G,
/// then B), which is also the `.cube` file order. Lookup uses trilinear
/// interpolation over the unit-domain grid.
///
/// # Example
///
/// ```rust
/// use emulsion_lut::Lut3D;
///
/// let lut = Lut3D::identity(17);
/// assert_eq!(lut.entry_count(), 17 * 17 * 17);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D {
    /// Grid entries in R-fastest order.
    pub data: Vec<[f32; 3]>,
    /// Samples per axis.
    pub size: usize,
    /// Input domain minimum per channel.
    pub domain_min: [f32; 3],
    /// Input domain maximum per channel.
    pub domain_max: [f32; 3],
}

impl Lut3D {
    /// Creates an identity (pass-through) LUT.
    pub fn identity(size: usize) -> Self {
        let step = 1.0 / (size - 1) as f32;
        let mut data = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    data.push([r as f32 * step, g as f32 * step, b as f32 * step]);
                }
            }
        }
        Self {
            data,
            size,
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
        }
    }

    /// Creates a LUT from R-fastest grid data.
    ///
    /// # Errors
    ///
    /// Returns [`LutError::InvalidSize`] unless `data.len() == size^3`.
    pub fn from_data(data: Vec<[f32; 3]>, size: usize) -> LutResult<Self> {
        let expected = size * size * size;
        if size < 2 || data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} entries for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self {
            data,
            size,
            domain_min: [0.0; 3],
            domain_max: [1.0; 3],
        })
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, min: [f32; 3], max: [f32; 3]) -> Self {
        self.domain_min = min;
        self.domain_max = max;
        self
    }

    /// Total number of grid entries.
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.size * self.size * self.size
    }

    #[inline]
    fn get(&self, r: usize, g: usize, b: usize) -> [f32; 3] {
        self.data[(b * self.size + g) * self.size + r]
    }

    /// Applies the LUT to an RGB triple with trilinear interpolation.
    ///
    /// Inputs outside the domain clamp to the grid edges.
    pub fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let n = self.size - 1;
        let mut idx = [0usize; 3];
        let mut frac = [0.0f32; 3];

        for c in 0..3 {
            let span = self.domain_max[c] - self.domain_min[c];
            let t = if span.abs() < f32::EPSILON {
                0.0
            } else {
                ((rgb[c] - self.domain_min[c]) / span).clamp(0.0, 1.0)
            };
            let scaled = t * n as f32;
            let i = (scaled.floor() as usize).min(n - 1);
            idx[c] = i;
            frac[c] = scaled - i as f32;
        }

        let (r, g, b) = (idx[0], idx[1], idx[2]);
        let (fr, fg, fb) = (frac[0], frac[1], frac[2]);

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            let c000 = self.get(r, g, b)[c];
            let c100 = self.get(r + 1, g, b)[c];
            let c010 = self.get(r, g + 1, b)[c];
            let c110 = self.get(r + 1, g + 1, b)[c];
            let c001 = self.get(r, g, b + 1)[c];
            let c101 = self.get(r + 1, g, b + 1)[c];
            let c011 = self.get(r, g + 1, b + 1)[c];
            let c111 = self.get(r + 1, g + 1, b + 1)[c];

            let c00 = c000 + (c100 - c000) * fr;
            let c10 = c010 + (c110 - c010) * fr;
            let c01 = c001 + (c101 - c001) * fr;
            let c11 = c011 + (c111 - c011) * fr;

            let c0 = c00 + (c10 - c00) * fg;
            let c1 = c01 + (c11 - c01) * fg;

            out[c] = c0 + (c1 - c0) * fb;
        }
        out
    }
}
