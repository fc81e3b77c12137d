//! Band-limited procedural noise.
//!
//! Provides the deterministic noise primitives used by the grain and gate
//! weave stages: hashed-lattice value noise, a 4-octave fractal sum, and
//! a pseudo-3D field built from three orthogonal 2D slices. The 3D field
//! trades exactness for cheap evaluation; three averaged 2D slices
//! decorrelate well enough for grain while only needing a 2D primitive.
//!
//! All functions are pure: the same coordinates and seed always produce
//! the same value, so a frame's grain is fully reproducible.

use crate::{fract, lerp, smoothstep};

/// Number of octaves in the fractal sum.
const OCTAVES: u32 = 4;

/// Slice decorrelation offsets for the pseudo-3D field.
const SLICE_OFFSET_A: f32 = 17.31;
const SLICE_OFFSET_B: f32 = 43.07;

#[inline]
fn mix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

#[inline]
fn mix64(mut h: u64) -> u64 {
    h = h.wrapping_add(0x9e37_79b9_7f4a_7c15);
    h = (h ^ (h >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h = (h ^ (h >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    h ^ (h >> 31)
}

/// Hashed lattice value at integer coordinates, in [0, 1).
#[inline]
fn lattice(ix: i32, iy: i32, seed: u32) -> f32 {
    let h = mix32(
        (ix as u32)
            .wrapping_mul(0x9e37_79b1)
            .wrapping_add((iy as u32).wrapping_mul(0x85eb_ca77))
            ^ seed,
    );
    (h >> 8) as f32 / 16_777_216.0
}

/// Smoothed 2D value noise in [0, 1).
///
/// Bilinear interpolation of hashed lattice values with smoothstep
/// weights, so the field is C1-continuous across cell boundaries.
pub fn value_noise(x: f32, y: f32, seed: u32) -> f32 {
    let ix = x.floor() as i32;
    let iy = y.floor() as i32;
    let fx = fract(x);
    let fy = fract(y);

    let u = smoothstep(0.0, 1.0, fx);
    let v = smoothstep(0.0, 1.0, fy);

    let n00 = lattice(ix, iy, seed);
    let n10 = lattice(ix.wrapping_add(1), iy, seed);
    let n01 = lattice(ix, iy.wrapping_add(1), seed);
    let n11 = lattice(ix.wrapping_add(1), iy.wrapping_add(1), seed);

    lerp(lerp(n00, n10, u), lerp(n01, n11, u), v)
}

/// 4-octave fractal value noise in [0, 1).
///
/// Octaves double in frequency and halve in amplitude; the result is
/// renormalized by the total amplitude.
pub fn fbm(x: f32, y: f32, seed: u32) -> f32 {
    let mut sum = 0.0;
    let mut amplitude = 0.5;
    let mut frequency = 1.0;
    let mut total = 0.0;

    for octave in 0..OCTAVES {
        sum += amplitude * value_noise(x * frequency, y * frequency, seed.wrapping_add(octave));
        total += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }

    sum / total
}

/// Pseudo-3D fractal noise in [-1, 1].
///
/// Averages three orthogonal 2D fbm slices (xy, yz, xz; the latter two
/// offset to decorrelate) instead of evaluating a true 3D lattice, then
/// maps the mean onto [-1, 1].
pub fn fbm3(x: f32, y: f32, z: f32, seed: u32) -> f32 {
    let a = fbm(x, y, seed);
    let b = fbm(y + SLICE_OFFSET_A, z + SLICE_OFFSET_A, seed);
    let c = fbm(x + SLICE_OFFSET_B, z + SLICE_OFFSET_B, seed);
    (a + b + c) / 3.0 * 2.0 - 1.0
}

/// Deterministic per-frame scalar in [-1, 1], keyed by frame index.
///
/// Used for gate weave and flicker: repeatable for a given frame index,
/// uncorrelated between `salt` values.
pub fn frame_hash(frame_index: u64, salt: u64) -> f32 {
    let h = mix64(frame_index ^ salt.wrapping_mul(0xa076_1d64_78bd_642f));
    let unit = (h >> 11) as f32 / (1u64 << 53) as f32;
    unit * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_noise_is_deterministic() {
        let a = value_noise(12.7, -3.2, 42);
        let b = value_noise(12.7, -3.2, 42);
        assert_eq!(a, b);
    }

    #[test]
    fn value_noise_in_range() {
        for i in 0..100 {
            let v = value_noise(i as f32 * 0.37, i as f32 * -0.91, 7);
            assert!((0.0..1.0).contains(&v), "v={}", v);
        }
    }

    #[test]
    fn seeds_decorrelate() {
        let a = fbm(5.5, 9.1, 1);
        let b = fbm(5.5, 9.1, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn fbm3_in_range() {
        for i in 0..200 {
            let t = i as f32 * 0.13;
            let v = fbm3(t * 3.0, t * 5.0, t, 99);
            assert!((-1.0..=1.0).contains(&v), "v={}", v);
        }
    }

    #[test]
    fn frame_hash_repeatable_and_bounded() {
        for frame in [0u64, 1, 2, 1000, u64::MAX] {
            let a = frame_hash(frame, 3);
            assert_eq!(a, frame_hash(frame, 3));
            assert!((-1.0..=1.0).contains(&a));
        }
        assert_ne!(frame_hash(5, 1), frame_hash(5, 2));
    }
}
