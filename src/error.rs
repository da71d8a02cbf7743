//! Error types for meshflow.
//!
//! Configuration problems (an empty particle budget, a mesh with nothing to
//! sample) fail loudly at bake time. Degenerate inputs that can be absorbed
//! (a single zero-area part, a texture-less material, an out-of-range texel
//! fetch) are handled by exclusion, fallback, or clamping and never surface
//! as errors.

use std::fmt;

/// Errors that can occur while baking particles onto a mesh surface.
#[derive(Debug)]
pub enum BakeError {
    /// The requested particle count was zero.
    ZeroParticleCount,
    /// No mesh part had positive surface area, so there is nothing to sample.
    NoSurfaceArea,
}

impl fmt::Display for BakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BakeError::ZeroParticleCount => {
                write!(f, "Particle count must be at least 1")
            }
            BakeError::NoSurfaceArea => {
                write!(
                    f,
                    "No mesh part has positive surface area; nothing to bake particles onto"
                )
            }
        }
    }
}

impl std::error::Error for BakeError {}

/// Errors that can occur during texture loading.
#[derive(Debug)]
pub enum TextureError {
    /// Failed to decode image data.
    ImageDecode(image::ImageError),
    /// Failed to read the file from disk.
    Io(std::io::Error),
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::ImageDecode(e) => write!(f, "Failed to decode image: {}", e),
            TextureError::Io(e) => write!(f, "Failed to read texture file: {}", e),
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextureError::ImageDecode(e) => Some(e),
            TextureError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for TextureError {
    fn from(e: image::ImageError) -> Self {
        TextureError::ImageDecode(e)
    }
}

impl From<std::io::Error> for TextureError {
    fn from(e: std::io::Error) -> Self {
        TextureError::Io(e)
    }
}
