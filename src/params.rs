//! Tunable simulation parameters.
//!
//! Every knob the flow field reads each frame lives here, with defaults
//! matching the reference scene and recommended ranges for UI exposure.
//! A control surface may overwrite any field between steps; the kernel
//! reads a consistent copy for the whole step.
//!
//! # Example
//!
//! ```
//! use meshflow::params::FlowFieldParams;
//!
//! let mut params = FlowFieldParams::default();
//! params.flow_field_strength = 4.0;
//! params.set_interaction(None); // pointer missed the mesh this frame
//! ```

use glam::Vec3;

/// Sentinel for "no active interaction": far enough outside any plausible
/// scene that the proximity test never triggers.
pub const NO_INTERACTION: Vec3 = Vec3::new(10_000.0, 10_000.0, 10_000.0);

/// Recommended default and UI range for a parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamRange {
    pub default: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

/// All runtime-tunable scalars and vectors read by the simulation kernel.
#[derive(Debug, Clone, Copy)]
pub struct FlowFieldParams {
    /// Spatial scale applied to a particle's anchor before the strength
    /// noise lookup.
    pub noise_scale: f32,
    /// Spatial frequency of the flow-direction field.
    pub flow_field_frequency: f32,
    /// Velocity multiplier along the flow direction.
    pub flow_field_strength: f32,
    /// Share of particles the field moves; higher influence lowers the
    /// noise threshold.
    pub flow_field_influence: f32,
    /// Center of the soft exclusion zone (e.g. a foreground object).
    pub exclusion_center: Vec3,
    /// Radius inside which flow strength fades to zero.
    pub exclusion_radius: f32,
    /// Base sprite size handed to the rasterizer via the life envelope.
    pub particle_size: f32,
    /// World-space pointer hit, or [`NO_INTERACTION`].
    pub interaction_point: Vec3,
    /// Radius of the pointer repulsion.
    pub interaction_radius: f32,
    /// Push strength of the pointer repulsion.
    pub interaction_strength: f32,
    /// Life advance per second; `0.3` gives a ~3.3 s average lifecycle.
    pub life_rate: f32,
}

impl Default for FlowFieldParams {
    fn default() -> Self {
        Self {
            noise_scale: 0.2,
            flow_field_frequency: 0.5,
            flow_field_strength: 2.0,
            flow_field_influence: 0.5,
            exclusion_center: Vec3::ZERO,
            exclusion_radius: 10.0,
            particle_size: 0.25,
            interaction_point: NO_INTERACTION,
            interaction_radius: 3.0,
            interaction_strength: 5.0,
            life_rate: 0.3,
        }
    }
}

impl FlowFieldParams {
    /// UI range for `flow_field_influence`.
    pub const INFLUENCE: ParamRange = ParamRange {
        default: 0.5,
        min: 0.0,
        max: 1.0,
        step: 0.001,
    };

    /// UI range for `flow_field_strength`.
    pub const STRENGTH: ParamRange = ParamRange {
        default: 2.0,
        min: 0.0,
        max: 10.0,
        step: 0.001,
    };

    /// UI range for `flow_field_frequency`.
    pub const FREQUENCY: ParamRange = ParamRange {
        default: 0.5,
        min: 0.0,
        max: 1.0,
        step: 0.001,
    };

    /// Feed the per-frame pointer result: a world-space hit point, or `None`
    /// when the pointer ray missed the mesh.
    pub fn set_interaction(&mut self, hit: Option<Vec3>) {
        self.interaction_point = hit.unwrap_or(NO_INTERACTION);
    }
}
