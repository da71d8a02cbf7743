//! Decoded surface textures for bake-time color sampling.
//!
//! The baker reads texel colors synchronously while placing particles, so a
//! texture must be fully decoded into memory before baking starts. This is
//! fine for a once-per-load bake and must not be reused from per-frame code.
//!
//! Lookups are nearest-neighbor with texel indices clamped to the valid
//! range, and the fetched color is converted from display (sRGB) space to
//! linear space before it is stored in the particle color buffer.
//!
//! # Supported Formats
//!
//! - PNG (recommended)
//! - JPEG

use crate::error::TextureError;
use glam::{Vec2, Vec3};
use std::path::Path;

/// A fully decoded RGBA image the baker can fetch texels from.
#[derive(Debug, Clone)]
pub struct TexturePixels {
    /// Raw RGBA pixel data (width * height * 4 bytes).
    data: Vec<u8>,
    /// Image width in pixels.
    width: u32,
    /// Image height in pixels.
    height: u32,
}

impl TexturePixels {
    /// Create a texture from raw RGBA data.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * 4`.
    ///
    /// # Example
    ///
    /// ```
    /// use meshflow::texture::TexturePixels;
    ///
    /// // 1x1 solid red
    /// let tex = TexturePixels::from_rgba(vec![255, 0, 0, 255], 1, 1);
    /// assert_eq!(tex.width(), 1);
    /// ```
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Load and decode a texture from an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fetch the texel nearest to `uv` and return its linear-space RGB.
    ///
    /// Texel indices are clamped to the valid range, so UVs outside `[0, 1]`
    /// read the nearest edge texel rather than erroring.
    pub fn sample_nearest(&self, uv: Vec2) -> Vec3 {
        let tx = ((uv.x * self.width as f32) as i64).clamp(0, self.width as i64 - 1) as usize;
        let ty = ((uv.y * self.height as f32) as i64).clamp(0, self.height as i64 - 1) as usize;

        let idx = (ty * self.width as usize + tx) * 4;
        let srgb = Vec3::new(
            self.data[idx] as f32 / 255.0,
            self.data[idx + 1] as f32 / 255.0,
            self.data[idx + 2] as f32 / 255.0,
        );
        srgb_to_linear(srgb)
    }
}

/// Convert a display-space (sRGB) color to linear space, per channel.
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    fn channel(c: f32) -> f32 {
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    Vec3::new(channel(c.x), channel(c.y), channel(c.z))
}
