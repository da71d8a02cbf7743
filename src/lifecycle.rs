//! Derived visual weights from the life phase.
//!
//! The downstream rasterizer does not read `life` directly; it reads a
//! per-particle scale and opacity derived from it. Both use the same
//! fade-in/fade-out envelope: particles grow in over the first tenth of
//! their cycle and shrink out over the last third, so resets never pop.

use crate::math::smoothstep;

/// Fade-in/fade-out weight for a life phase, in `[0, 1]`.
///
/// Ramps `0 -> 1` over `life` in `[0, 0.1]`, holds at `1`, and ramps back
/// to `0` over `[0.7, 1.0]`.
pub fn envelope(life: f32) -> f32 {
    let fade_in = smoothstep(0.0, 0.1, life);
    let fade_out = 1.0 - smoothstep(0.7, 1.0, life);
    fade_in.min(fade_out)
}

/// Sprite scale for a life phase: the envelope times the base size.
pub fn scale(life: f32, particle_size: f32) -> f32 {
    envelope(life) * particle_size
}

/// Fill `out` with one scale per particle, reusing its allocation.
pub fn fill_scales(life: &[f32], particle_size: f32, out: &mut Vec<f32>) {
    out.clear();
    out.extend(life.iter().map(|&l| scale(l, particle_size)));
}

/// Fill `out` with one opacity weight per particle, reusing its allocation.
pub fn fill_opacities(life: &[f32], out: &mut Vec<f32>) {
    out.clear();
    out.extend(life.iter().map(|&l| envelope(l)));
}
