//! Input mesh geometry for the surface baker.
//!
//! A loaded model is handed to the baker as a list of [`MeshPart`]s: a
//! triangle list (indexed or not), a world transform, and a [`Material`]
//! carrying an optional decoded color texture and an optional flat color.
//! Asset decoding itself happens upstream; this module only describes the
//! shape the baker consumes.
//!
//! # Example
//!
//! ```
//! use meshflow::mesh::{Material, MeshPart};
//! use glam::{Vec2, Vec3};
//!
//! // One triangle in the XY plane with a flat red material.
//! let part = MeshPart::new(vec![
//!     Vec3::ZERO,
//!     Vec3::X,
//!     Vec3::Y,
//! ])
//! .with_uvs(vec![Vec2::ZERO, Vec2::X, Vec2::Y])
//! .with_material(Material::flat(Vec3::new(1.0, 0.0, 0.0)));
//!
//! assert_eq!(part.triangle_count(), 1);
//! ```

use crate::texture::TexturePixels;
use glam::{Mat4, Vec2, Vec3};

/// Surface appearance of a mesh part.
///
/// The baker prefers the color texture; without one it falls back to the
/// flat color, and without either it uses white.
#[derive(Debug, Clone, Default)]
pub struct Material {
    /// Flat base color (linear RGB).
    pub color: Option<Vec3>,
    /// Decoded color texture, sampled at the particle's surface UV.
    pub texture: Option<TexturePixels>,
}

impl Material {
    /// A material with only a flat color.
    pub fn flat(color: Vec3) -> Self {
        Self {
            color: Some(color),
            texture: None,
        }
    }

    /// A material with a color texture.
    pub fn textured(texture: TexturePixels) -> Self {
        Self {
            color: None,
            texture: Some(texture),
        }
    }
}

/// One triangulated piece of the input model.
#[derive(Debug, Clone)]
pub struct MeshPart {
    /// Vertex positions in the part's local space.
    pub positions: Vec<Vec3>,
    /// Per-vertex texture coordinates; empty means no UVs.
    pub uvs: Vec<Vec2>,
    /// Triangle indices; `None` means the positions form a plain triangle list.
    pub indices: Option<Vec<u32>>,
    /// Local-to-world transform applied to sampled points.
    pub transform: Mat4,
    /// Surface appearance.
    pub material: Material,
}

impl MeshPart {
    /// Create a part from a plain triangle list with an identity transform.
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self {
            positions,
            uvs: Vec::new(),
            indices: None,
            transform: Mat4::IDENTITY,
            material: Material::default(),
        }
    }

    /// Set per-vertex texture coordinates.
    pub fn with_uvs(mut self, uvs: Vec<Vec2>) -> Self {
        self.uvs = uvs;
        self
    }

    /// Set triangle indices.
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Set the local-to-world transform.
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Set the surface material.
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Number of triangles in this part.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Vertex indices of triangle `t`.
    pub fn triangle(&self, t: usize) -> [usize; 3] {
        match &self.indices {
            Some(indices) => [
                indices[t * 3] as usize,
                indices[t * 3 + 1] as usize,
                indices[t * 3 + 2] as usize,
            ],
            None => [t * 3, t * 3 + 1, t * 3 + 2],
        }
    }

    /// UV for vertex `v`, or zero when the part has no UVs.
    pub fn uv(&self, v: usize) -> Vec2 {
        self.uvs.get(v).copied().unwrap_or(Vec2::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_and_plain_triangles() {
        let positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE];

        let plain = MeshPart::new(positions[..3].to_vec());
        assert_eq!(plain.triangle_count(), 1);
        assert_eq!(plain.triangle(0), [0, 1, 2]);

        let indexed = MeshPart::new(positions).with_indices(vec![0, 1, 2, 1, 3, 2]);
        assert_eq!(indexed.triangle_count(), 2);
        assert_eq!(indexed.triangle(1), [1, 3, 2]);
    }

    #[test]
    fn test_missing_uvs_default_to_zero() {
        let part = MeshPart::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y]);
        assert_eq!(part.uv(2), Vec2::ZERO);
    }
}
