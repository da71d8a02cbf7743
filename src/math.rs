//! Shader-style scalar helpers shared by the kernel and the life envelope.

/// Hermite interpolation between `edge0` and `edge1`, clamped to `[0, 1]`.
///
/// Matches GLSL/WGSL `smoothstep`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part of `x`, always in `[0, 1)` for finite input.
///
/// Matches GLSL/WGSL `fract` (`x - floor(x)`), so `fract(-0.25) == 0.75`.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}
