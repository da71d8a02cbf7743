//! The surface baker: mesh parts in, per-particle initial state out.
//!
//! Runs once per mesh load. Each eligible part gets a particle quota
//! proportional to its share of the total surface area, and each particle
//! gets a world-space position drawn uniformly over the surface, a color
//! read from the part's texture (or flat color), and a random life phase in
//! `[0, 1)` so the swarm's lifecycle resets stay staggered.
//!
//! # Example
//!
//! ```
//! use meshflow::bake::bake;
//! use meshflow::mesh::{Material, MeshPart};
//! use glam::Vec3;
//!
//! let part = MeshPart::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y])
//!     .with_material(Material::flat(Vec3::ONE));
//! let baked = bake(&[part], 1000).unwrap();
//! assert_eq!(baked.particle_count(), 1000);
//! ```

use crate::error::BakeError;
use crate::mesh::MeshPart;
use crate::sampler::SurfaceSampler;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The baker's output: three flat buffers indexed by particle id.
///
/// `position` and `color` hold three floats per particle, `life` one. The
/// buffers are ready for upload or for handing to
/// [`FlowFieldSim`](crate::flowfield::FlowFieldSim) as-is.
#[derive(Debug, Clone)]
pub struct BakedParticles {
    /// World-space positions, `3 * particle_count` floats.
    pub position: Vec<f32>,
    /// Linear RGB colors, `3 * particle_count` floats.
    pub color: Vec<f32>,
    /// Life phases in `[0, 1)`, `particle_count` floats.
    pub life: Vec<f32>,
}

impl BakedParticles {
    /// Number of particles in the bake.
    pub fn particle_count(&self) -> usize {
        self.life.len()
    }
}

/// Bake `particle_count` particles onto the surface of `parts`.
///
/// Particles are distributed across parts proportionally to surface area;
/// each part's quota is `floor(part_area / total_area * particle_count)`,
/// written at a running offset. Rounding can leave a shortfall of up to
/// `parts - 1` slots at the tail, which keep their zero-initialized default
/// (position at origin, life 0) rather than being redistributed.
///
/// Zero-area parts are excluded without affecting the rest.
///
/// # Errors
///
/// - [`BakeError::ZeroParticleCount`] when `particle_count == 0`.
/// - [`BakeError::NoSurfaceArea`] when no part has positive area.
pub fn bake(parts: &[MeshPart], particle_count: usize) -> Result<BakedParticles, BakeError> {
    if particle_count == 0 {
        return Err(BakeError::ZeroParticleCount);
    }

    let samplers: Vec<SurfaceSampler> =
        parts.iter().filter_map(SurfaceSampler::build).collect();
    let total_area: f32 = samplers.iter().map(|s| s.area()).sum();
    if samplers.is_empty() {
        return Err(BakeError::NoSurfaceArea);
    }

    let mut baked = BakedParticles {
        position: vec![0.0; particle_count * 3],
        color: vec![0.0; particle_count * 3],
        life: vec![0.0; particle_count],
    };

    let mut rng = SmallRng::from_entropy();
    let mut offset = 0usize;

    for sampler in &samplers {
        let part = sampler.part();
        let quota = ((sampler.area() / total_area) * particle_count as f32).floor() as usize;

        for i in 0..quota {
            let (local, uv) = sampler.sample(&mut rng);
            let world = part.transform.transform_point3(local);

            let index1 = offset + i;
            let index3 = index1 * 3;
            baked.position[index3] = world.x;
            baked.position[index3 + 1] = world.y;
            baked.position[index3 + 2] = world.z;

            baked.life[index1] = rng.gen::<f32>();

            let color = match &part.material.texture {
                Some(texture) => texture.sample_nearest(uv),
                None => part.material.color.unwrap_or(Vec3::ONE),
            };
            baked.color[index3] = color.x;
            baked.color[index3 + 1] = color.y;
            baked.color[index3 + 2] = color.z;
        }

        offset += quota;
    }

    Ok(baked)
}
