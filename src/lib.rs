//! # meshflow - Flow-Field Particles Over Mesh Surfaces
//!
//! Bake hundreds of thousands of particles onto the surface of a
//! triangulated mesh, then animate them frame-by-frame along a procedural
//! noise flow field with pointer repulsion and staggered lifecycle resets.
//!
//! ## Quick Start
//!
//! ```
//! use meshflow::prelude::*;
//! use glam::{Vec2, Vec3};
//!
//! // One triangle with a flat red material; real hosts pass their loaded
//! // model's parts here instead.
//! let part = MeshPart::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y])
//!     .with_uvs(vec![Vec2::ZERO, Vec2::X, Vec2::Y])
//!     .with_material(Material::flat(Vec3::new(1.0, 0.0, 0.0)));
//!
//! // Bake once per mesh load...
//! let baked = bake(&[part], 250_000).unwrap();
//!
//! // ...then step once per rendered frame.
//! let mut sim = FlowFieldSim::new(&baked, FlowFieldParams::default()).unwrap();
//! sim.step(1.0 / 60.0);
//!
//! // The rasterizer reads these every frame.
//! let _positions: &[f32] = sim.positions_flat();
//! let _colors: &[f32] = sim.colors_flat();
//! ```
//!
//! ## Core Concepts
//!
//! ### Baking
//!
//! [`bake`](bake::bake) samples each mesh part's surface proportionally to
//! triangle area, records the world position and the surface-texture color
//! under each sample, and seeds every particle with a random life phase so
//! the swarm's resets stay staggered. It runs once per mesh load and its
//! samplers are discarded afterwards.
//!
//! ### Stepping
//!
//! [`FlowFieldSim::step`](flowfield::FlowFieldSim::step) advances all
//! particles in one data-parallel pass: layered 4D simplex noise picks how
//! strongly the field grips each particle, domain-warped noise picks the
//! direction, a soft exclusion mask carves a dead zone around a foreground
//! object, and the pointer pushes nearby particles away. Particles whose
//! life wraps past `1.0` snap back to their baked anchor.
//!
//! ### Feeding interaction
//!
//! Convert the pointer to a world-space hit externally and feed it each
//! frame with [`FlowFieldParams::set_interaction`](params::FlowFieldParams::set_interaction);
//! a raycast miss maps to a far-away sentinel rather than a flag.
//!
//! ### Rendering
//!
//! This crate does not rasterize. Each frame the host reads positions,
//! colors, and the [`lifecycle`] scale/opacity envelopes and draws them
//! however it likes.

pub mod bake;
pub mod error;
pub mod flowfield;
pub mod lifecycle;
pub mod math;
pub mod mesh;
pub mod noise;
pub mod params;
pub mod sampler;
pub mod texture;
pub mod time;

pub use bake::{bake, BakedParticles};
pub use bytemuck;
pub use error::{BakeError, TextureError};
pub use flowfield::{FlowFieldSim, MAX_DELTA};
pub use glam::{Vec2, Vec3, Vec4};
pub use mesh::{Material, MeshPart};
pub use params::{FlowFieldParams, ParamRange, NO_INTERACTION};
pub use sampler::SurfaceSampler;
pub use texture::TexturePixels;
pub use time::FrameTimer;

/// Convenient re-exports for common usage.
///
/// ```
/// use meshflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bake::{bake, BakedParticles};
    pub use crate::error::{BakeError, TextureError};
    pub use crate::flowfield::FlowFieldSim;
    pub use crate::lifecycle;
    pub use crate::mesh::{Material, MeshPart};
    pub use crate::noise::simplex4;
    pub use crate::params::{FlowFieldParams, NO_INTERACTION};
    pub use crate::sampler::SurfaceSampler;
    pub use crate::texture::TexturePixels;
    pub use crate::time::FrameTimer;
    pub use crate::{Vec2, Vec3, Vec4};
}
