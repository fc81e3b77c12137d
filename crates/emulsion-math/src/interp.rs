//! Interpolation and range utilities.

/// Linear interpolation between `a` and `b`.
///
/// # Example
///
/// ```rust
/// use emulsion_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Mix of `a` and `b` by `t` (alias of [`lerp`], shader naming).
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    lerp(a, b, t)
}

/// Clamps `value` to [0, 1].
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Hermite smoothstep between two edges.
///
/// Returns 0 below `edge0`, 1 above `edge1`, and a smooth cubic ramp
/// in between.
///
/// # Example
///
/// ```rust
/// use emulsion_math::smoothstep;
///
/// assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
/// assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
/// assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
/// ```
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part of `x` (always non-negative).
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Rec.709 luminance of a linear RGB triple.
///
/// This is the luminance definition used by every stage that weighs or
/// perturbs by brightness (grain weighting, bright-pass extraction,
/// saturation mixing).
#[inline]
pub fn luma(rgb: [f32; 3]) -> f32 {
    0.2126 * rgb[0] + 0.7152 * rgb[1] + 0.0722 * rgb[2]
}
