//! The flow-field simulation core.
//!
//! [`FlowFieldSim`] exclusively owns the four per-particle buffers (current
//! position, baked initial position, color, life) and advances them once per
//! frame with [`FlowFieldSim::step`]. The per-particle update is a pure
//! function of that particle's state plus the shared parameters, so the pass
//! runs as one unordered rayon dispatch over all particles with no data
//! dependencies between indices and bitwise-deterministic results.
//!
//! Per particle and frame:
//!
//! 1. When `life >= 1.0`, wrap it to its fractional part and snap the
//!    particle back to its baked anchor; no motion that frame.
//! 2. Otherwise sample a strength from 4D noise at the anchor, threshold it
//!    by the influence knob, and fade it out inside the exclusion zone.
//! 3. Build a flow direction from domain-warped noise, integrate along it,
//!    apply pointer repulsion when in range, and advance life.
//!
//! # Example
//!
//! ```
//! use meshflow::bake::bake;
//! use meshflow::flowfield::FlowFieldSim;
//! use meshflow::mesh::MeshPart;
//! use meshflow::params::FlowFieldParams;
//! use glam::Vec3;
//!
//! let part = MeshPart::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
//! let baked = bake(&[part], 10_000).unwrap();
//! let mut sim = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();
//!
//! // Host loop: one step per rendered frame.
//! sim.step(1.0 / 60.0);
//! ```

use crate::bake::BakedParticles;
use crate::error::BakeError;
use crate::math::{fract, smoothstep};
use crate::noise::simplex4;
use crate::params::FlowFieldParams;
use glam::Vec3;
use rayon::prelude::*;

/// Upper bound on one step's delta time; frame hitches never produce a
/// larger integration step.
pub const MAX_DELTA: f32 = 0.1;

/// Scale applied to elapsed time before it feeds the noise lookups.
const TIME_SCALE: f32 = 0.2;

/// Scale of the domain-warp offset added to the flow lookup position.
const WARP_SCALE: f32 = 0.5;

/// A running flow-field simulation over a fixed set of particles.
///
/// The particle count is fixed at construction; there is no dynamic
/// resizing. Parameters may be changed between steps through
/// [`params_mut`](Self::params_mut) and take effect on the next step.
#[derive(Clone)]
pub struct FlowFieldSim {
    position: Vec<Vec3>,
    initial_position: Vec<Vec3>,
    color: Vec<Vec3>,
    life: Vec<f32>,
    params: FlowFieldParams,
    /// Accumulated clamped delta time, drives the noise animation.
    elapsed: f32,
}

/// Shared per-step inputs for the particle kernel.
struct StepContext {
    params: FlowFieldParams,
    dt: f32,
    /// Time coordinate for the strength lookup.
    noise_time: f32,
    /// Time coordinate for the warp and flow lookups.
    flow_time: f32,
}

impl FlowFieldSim {
    /// Initialize the simulation from a bake.
    ///
    /// Copies the baked buffers; `initial_position` is immutable from here
    /// on and serves as each particle's respawn anchor.
    ///
    /// # Errors
    ///
    /// [`BakeError::ZeroParticleCount`] when the bake holds no particles.
    pub fn new(baked: &BakedParticles, params: FlowFieldParams) -> Result<Self, BakeError> {
        if baked.particle_count() == 0 {
            return Err(BakeError::ZeroParticleCount);
        }

        let position: Vec<Vec3> = bytemuck::cast_slice(&baked.position).to_vec();
        let color: Vec<Vec3> = bytemuck::cast_slice(&baked.color).to_vec();

        Ok(Self {
            initial_position: position.clone(),
            position,
            color,
            life: baked.life.clone(),
            params,
            elapsed: 0.0,
        })
    }

    /// Number of particles, fixed at initialization.
    pub fn particle_count(&self) -> usize {
        self.life.len()
    }

    /// Current simulation parameters.
    pub fn params(&self) -> &FlowFieldParams {
        &self.params
    }

    /// Mutable access for control surfaces; writes land between steps.
    pub fn params_mut(&mut self) -> &mut FlowFieldParams {
        &mut self.params
    }

    /// Advance every particle by one frame.
    ///
    /// `dt` is clamped to `[0, MAX_DELTA]` seconds, so a zero or negative
    /// delta never moves life backward. The pass is fully parallel across
    /// particles; given identical buffers, parameters, and `dt` it produces
    /// bitwise-identical results.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_DELTA);
        self.elapsed += dt;

        let t = self.elapsed * TIME_SCALE;
        let ctx = StepContext {
            params: self.params,
            dt,
            noise_time: t + 1.0,
            flow_time: t,
        };

        self.position
            .par_iter_mut()
            .zip(self.life.par_iter_mut())
            .zip(self.initial_position.par_iter())
            .for_each(|((position, life), initial)| {
                update_particle(position, life, *initial, &ctx);
            });
    }

    /// Current world-space positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.position
    }

    /// Baked respawn anchors.
    pub fn initial_positions(&self) -> &[Vec3] {
        &self.initial_position
    }

    /// Baked linear RGB colors.
    pub fn colors(&self) -> &[Vec3] {
        &self.color
    }

    /// Current life phases.
    pub fn life(&self) -> &[f32] {
        &self.life
    }

    /// Positions as a flat `f32` buffer, three floats per particle, for
    /// handing to a rasterizer.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.position)
    }

    /// Colors as a flat `f32` buffer, three floats per particle.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.color)
    }

    /// Accumulated animation time in seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Pure per-particle update. No reads or writes outside index `i`'s own
/// state, which is what makes the surrounding dispatch order-independent.
fn update_particle(position: &mut Vec3, life: &mut f32, initial: Vec3, ctx: &StepContext) {
    let p = &ctx.params;

    // Lifecycle wrap: keep the fractional remainder instead of zeroing so
    // staggered bake phases never synchronize into a visible pulse.
    if *life >= 1.0 {
        *life = fract(*life);
        *position = initial;
        return;
    }

    // How strongly the field grips this particle, anchored at its baked
    // position so the grip does not drift as the particle moves.
    let raw = simplex4((initial * p.noise_scale).extend(ctx.noise_time));
    let threshold = (p.flow_field_influence - 0.5) * -2.0;
    let mut strength = smoothstep(threshold, 1.0, raw);

    // Soft dead zone around the exclusion center, one world unit of falloff.
    let exclusion = smoothstep(
        p.exclusion_radius,
        p.exclusion_radius + 1.0,
        initial.distance(p.exclusion_center),
    );
    strength *= exclusion;

    let warped = warp(*position * p.flow_field_frequency, ctx.flow_time);
    let flow = Vec3::new(
        simplex4(warped.extend(ctx.flow_time)),
        // Slight upward bias keeps the swarm drifting instead of settling.
        simplex4((warped + 12.3).extend(ctx.flow_time)) + 0.8,
        simplex4((warped + 25.1).extend(ctx.flow_time)),
    )
    .normalize_or_zero();

    *position += flow * ctx.dt * strength * p.flow_field_strength;

    // Pointer repulsion stacks on top of flow motion whenever in range; the
    // no-interaction sentinel keeps the distance test from ever passing.
    let dist = position.distance(p.interaction_point);
    if dist < p.interaction_radius {
        let away = (*position - p.interaction_point).normalize_or_zero();
        *position += away * (p.interaction_radius - dist) * p.interaction_strength * ctx.dt;
    }

    *life += ctx.dt * p.life_rate;
}

/// Domain warp: perturb the lookup position by three decorrelated noise
/// samples before the flow lookup, for organic, non-grid-aligned motion.
fn warp(pos: Vec3, t: f32) -> Vec3 {
    let offset = Vec3::new(
        simplex4(pos.extend(t)),
        simplex4((pos + 4.5).extend(t)),
        simplex4((pos + 9.2).extend(t)),
    );
    pos + offset * WARP_SCALE
}
