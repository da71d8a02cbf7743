//! 4D simplex noise, the procedural primitive behind the flow field.
//!
//! A single stateless function `simplex4(Vec4) -> f32`: continuous,
//! band-limited pseudo-random output in roughly `[-1, 1]`, deterministic for
//! a given input, with no visible tiling at the scales the simulation uses.
//! The fourth component carries animation time, so the field drifts
//! smoothly instead of scrolling.

use glam::Vec4;
use noise::{NoiseFn, Simplex};
use std::sync::LazyLock;

/// Fixed lattice seed. The field is not required to match any other
/// implementation bit-for-bit, only to stay stable within a build.
const LATTICE_SEED: u32 = 0;

static SIMPLEX: LazyLock<Simplex> = LazyLock::new(|| Simplex::new(LATTICE_SEED));

/// Sample 4D simplex noise at `v`.
///
/// Output is in approximately `[-1, 1]` and is deterministic: equal inputs
/// always produce bitwise-equal outputs.
#[inline]
pub fn simplex4(v: Vec4) -> f32 {
    SIMPLEX.get([v.x as f64, v.y as f64, v.z as f64, v.w as f64]) as f32
}
