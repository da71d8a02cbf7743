//! Area-weighted surface sampling over a mesh part.
//!
//! A [`SurfaceSampler`] holds a cumulative-area distribution over a part's
//! triangles so that random surface points land with probability
//! proportional to area, giving uniform density across irregular
//! triangulations. Samplers are built once at bake time and discarded with
//! the bake; the simulation core never sees them.

use crate::mesh::MeshPart;
use glam::{Vec2, Vec3};
use rand::Rng;

/// Cumulative-area distribution over one mesh part's triangles.
pub struct SurfaceSampler<'a> {
    part: &'a MeshPart,
    /// Running total of triangle areas; last entry is the part's total area.
    cumulative: Vec<f32>,
    total_area: f32,
}

impl<'a> SurfaceSampler<'a> {
    /// Build a sampler for `part`, or `None` when the part has no surface
    /// area to sample (zero-area parts are excluded from baking).
    pub fn build(part: &'a MeshPart) -> Option<Self> {
        let mut cumulative = Vec::with_capacity(part.triangle_count());
        let mut total_area = 0.0f32;

        for t in 0..part.triangle_count() {
            let [a, b, c] = part.triangle(t);
            total_area += triangle_area(
                part.positions[a],
                part.positions[b],
                part.positions[c],
            );
            cumulative.push(total_area);
        }

        if total_area > 0.0 {
            Some(Self {
                part,
                cumulative,
                total_area,
            })
        } else {
            None
        }
    }

    /// Total surface area of the part in its local space.
    pub fn area(&self) -> f32 {
        self.total_area
    }

    /// The mesh part this sampler draws from.
    pub fn part(&self) -> &MeshPart {
        self.part
    }

    /// Draw one uniformly-area-weighted surface point.
    ///
    /// Returns the point in the part's local space together with its
    /// interpolated UV. The caller applies the part's world transform.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> (Vec3, Vec2) {
        let target = rng.gen::<f32>() * self.total_area;
        let t = self
            .cumulative
            .partition_point(|&acc| acc < target)
            .min(self.cumulative.len() - 1);

        let [ia, ib, ic] = self.part.triangle(t);
        let (a, b, c) = (
            self.part.positions[ia],
            self.part.positions[ib],
            self.part.positions[ic],
        );

        // Uniform barycentric sample: fold points past the diagonal back
        // into the triangle.
        let mut u = rng.gen::<f32>();
        let mut v = rng.gen::<f32>();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }

        let position = a + (b - a) * u + (c - a) * v;
        let (ua, ub, uc) = (self.part.uv(ia), self.part.uv(ib), self.part.uv(ic));
        let uv = ua + (ub - ua) * u + (uc - ua) * v;

        (position, uv)
    }
}

fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (b - a).cross(c - a).length() * 0.5
}
