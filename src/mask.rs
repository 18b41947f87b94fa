//! Radial alpha mask: a precomputed soft falloff sampled by sprite
//! fragments.
//!
//! The mask is a small grid of 16-bit samples with a Gaussian falloff from
//! the center, built once at startup and uploaded as an `R16Unorm` texture.
//! Sampling it with the per-corner texture coordinates of each quad is what
//! turns a square sprite into a soft round one.
//!
//! A mask can also be loaded from a grayscale image file when a custom
//! sprite shape is wanted:
//!
//! ```ignore
//! let mask = AlphaMask::from_image("assets/soft_star.png")?;
//! ```

use std::path::Path;

use crate::error::MaskError;

/// Largest sample value [`AlphaMask::build`] produces: the largest positive
/// 16-bit signed value, i.e. half the unorm range.
pub const MAX_SAMPLE: u16 = i16::MAX as u16;

/// Default falloff sharpness. Larger is a tighter, smaller dot.
pub const DEFAULT_SHARPNESS: f32 = 13.0;

/// A `width x height` grid of 16-bit alpha samples. Immutable once built;
/// owned by the rendering side.
#[derive(Debug, Clone)]
pub struct AlphaMask {
    width: u32,
    height: u32,
    samples: Vec<u16>,
}

impl AlphaMask {
    /// Fill a `width x height` grid with `exp(-sharpness * (x^2 + y^2))`
    /// scaled by [`MAX_SAMPLE`], where `x` and `y` map the grid index into
    /// [-1, 1].
    pub fn build(width: u32, height: u32, sharpness: f32) -> Self {
        let mut samples = Vec::with_capacity((width * height) as usize);
        for j in 0..height {
            let y = j as f32 / (height - 1).max(1) as f32 * 2.0 - 1.0;
            for i in 0..width {
                let x = i as f32 / (width - 1).max(1) as f32 * 2.0 - 1.0;
                let m = (-sharpness * (x * x + y * y)).exp();
                samples.push((m * MAX_SAMPLE as f32) as u16);
            }
        }

        Self {
            width,
            height,
            samples,
        }
    }

    /// Load a mask from a grayscale image file.
    ///
    /// Supports PNG and JPEG. Color images are converted to 16-bit luma.
    pub fn from_image<P: AsRef<Path>>(path: P) -> Result<Self, MaskError> {
        let img = image::open(path.as_ref())?.into_luma16();
        let (width, height) = img.dimensions();

        Ok(Self {
            width,
            height,
            samples: img.into_raw(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw sample at a grid coordinate.
    pub fn sample(&self, i: u32, j: u32) -> u16 {
        self.samples[(j * self.width + i) as usize]
    }

    /// Sample normalized to 0.0-1.0 of the full 16-bit range, which is the
    /// value a shader reads through an `R16Unorm` view.
    pub fn value_at(&self, i: u32, j: u32) -> f32 {
        self.sample(i, j) as f32 / u16::MAX as f32
    }

    /// Little-endian bytes for the texture upload, row-major, 2 bytes per
    /// sample.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.samples)
    }

    /// Bytes per row of the uploaded texture.
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 2
    }
}
