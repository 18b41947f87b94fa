//! # Nova
//!
//! Additive point-sprite particle cloud renderer.
//!
//! Thousands of particles radiate outward from the origin along fixed
//! directions. Each one is drawn as a camera-facing textured quad whose
//! alpha comes from a precomputed radial gradient, so a square sprite reads
//! as a soft round dot. A particle that leaves the bounding cube collapses
//! to near-zero scale and picks up a fresh hue from the elapsed time, so
//! the cloud replenishes itself for as long as the window is open.
//!
//! ## Quick Start
//!
//! ```ignore
//! use nova::Cloud;
//!
//! fn main() -> Result<(), nova::CloudError> {
//!     env_logger::init();
//!
//!     Cloud::new()
//!         .with_particle_count(80_000)
//!         .with_bounds(10.0)
//!         .run()
//! }
//! ```
//!
//! ## How a frame works
//!
//! The CPU owns the particle state. Every frame, in order:
//!
//! 1. [`time::Time`] measures the frame delta.
//! 2. [`FrameState::tick`] advances the animation phase and derives the
//!    sprite half-size.
//! 3. [`Outflow::advance`] moves every particle outward and collapses the
//!    ones that left the bounding cube.
//! 4. The buffer is serialized and uploaded, then drawn as one instanced
//!    triangle-strip call - four vertices per particle, expanded into a
//!    view-space quad by the vertex stage in `sprite.wgsl`.
//!
//! The simulation finishes before the draw is issued; the GPU only ever
//! reads the buffer the step just wrote.
//!
//! ## Shaping sprites
//!
//! [`AlphaMask`] builds the default Gaussian falloff table, or loads a
//! grayscale image for custom sprite shapes. The pure kernels in [`sprite`]
//! mirror the WGSL stages one for one and pin their contracts in tests.

pub mod cloud;
pub mod error;
pub mod frame;
pub mod mask;
pub mod particle;
pub mod sim;
pub mod sprite;
pub mod time;

mod camera;
mod gpu;
mod shader;
mod window;

pub use bytemuck;
pub use cloud::Cloud;
pub use error::{CloudError, GpuError, MaskError};
pub use frame::FrameState;
pub use glam::{Vec2, Vec3, Vec4};
pub use mask::AlphaMask;
pub use particle::{Particle, ParticleBuffer};
pub use shader::SPRITE_SOURCE;
pub use sim::Outflow;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use nova::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cloud::Cloud;
    pub use crate::error::{CloudError, GpuError, MaskError};
    pub use crate::frame::FrameState;
    pub use crate::mask::AlphaMask;
    pub use crate::particle::{Particle, ParticleBuffer};
    pub use crate::sim::Outflow;
    pub use crate::time::Time;
    pub use crate::{Vec2, Vec3, Vec4};
}
