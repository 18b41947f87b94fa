//! Particle storage and the GPU memory layout of one particle.
//!
//! The cloud is a flat, fixed-size collection: particles are never added or
//! removed after spawn. A particle that leaves the bounding cube is reset in
//! place by [`Particle::collapse`] rather than being destroyed.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// One particle of the cloud.
///
/// `position` is world space. `color` is RGBA with components in 0.0-1.0,
/// always derived from an HSV triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub color: Vec4,
}

impl Particle {
    /// Collapse this particle back toward the origin and recolor it.
    ///
    /// The position keeps its direction but is scaled by `shrink` (near
    /// zero, so the sprite vanishes for a frame before drifting out again),
    /// and the color is reassigned from `hue` at full saturation and value.
    pub fn collapse(&mut self, shrink: f32, hue: f32) {
        self.position *= shrink;
        self.color = hsv_to_rgb(hue, 1.0, 1.0).extend(1.0);
    }
}

/// GPU-side layout of one particle.
///
/// The vec3 position is padded so the color lands on a 16-byte boundary;
/// this struct is the vertex-buffer stride and must match the instance
/// attributes declared for the render pipeline.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub struct ParticleGpu {
    pub position: [f32; 3],
    pub _pad: f32,
    pub color: [f32; 4],
}

/// Byte offset of the color attribute within [`ParticleGpu`].
pub const COLOR_OFFSET: u32 = 16;

/// Fixed-size particle collection, mutated in place every frame.
#[derive(Debug, Clone)]
pub struct ParticleBuffer {
    particles: Vec<Particle>,
}

impl ParticleBuffer {
    /// Spawn `count` particles on a sphere of radius `radius`, all colored
    /// with the same initial `hue` at full saturation and value.
    pub fn spawn(count: u32, radius: f32, hue: f32) -> Self {
        let mut rng = SmallRng::from_entropy();
        Self::spawn_with_rng(&mut rng, count, radius, hue)
    }

    /// Spawn with a caller-provided RNG for deterministic setups.
    pub fn spawn_with_rng<R: Rng>(rng: &mut R, count: u32, radius: f32, hue: f32) -> Self {
        let color = hsv_to_rgb(hue, 1.0, 1.0).extend(1.0);
        let particles = (0..count)
            .map(|_| Particle {
                position: random_on_sphere(rng, radius),
                color,
            })
            .collect();
        Self { particles }
    }

    /// Number of particles. Constant for the buffer's lifetime.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn position(&self, index: usize) -> Vec3 {
        self.particles[index].position
    }

    pub fn color(&self, index: usize) -> Vec4 {
        self.particles[index].color
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Serialize every particle into `out`, reusing its capacity.
    ///
    /// Called once per frame before the upload; after the first frame this
    /// does not allocate.
    pub fn write_gpu(&self, out: &mut Vec<ParticleGpu>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| ParticleGpu {
            position: p.position.to_array(),
            _pad: 0.0,
            color: p.color.to_array(),
        }));
    }
}

/// Random point on the surface of a sphere of given radius.
fn random_on_sphere<R: Rng>(rng: &mut R, radius: f32) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let phi = rng.gen_range(0.0..PI);

    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Convert HSV to RGB.
///
/// * `h` - 0.0 to 1.0 (wraps: red, yellow, green, cyan, blue, magenta, red)
/// * `s` - 0.0 (gray) to 1.0 (vivid)
/// * `v` - 0.0 (black) to 1.0 (bright)
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Vec3 {
    let c = v * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h * 6.0) as u32 % 6 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Vec3::new(r + m, g + m, b + m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_places_particles_on_sphere() {
        let mut rng = SmallRng::seed_from_u64(1);
        let buffer = ParticleBuffer::spawn_with_rng(&mut rng, 200, 0.8, 0.7);

        assert_eq!(buffer.len(), 200);
        for p in buffer.as_slice() {
            assert!((p.position.length() - 0.8).abs() < 1e-4);
        }
    }

    #[test]
    fn test_spawn_color_is_initial_hue() {
        let mut rng = SmallRng::seed_from_u64(2);
        let buffer = ParticleBuffer::spawn_with_rng(&mut rng, 4, 0.8, 0.7);

        let expected = hsv_to_rgb(0.7, 1.0, 1.0).extend(1.0);
        for i in 0..buffer.len() {
            assert_eq!(buffer.color(i), expected);
        }
    }

    #[test]
    fn test_collapse_scales_position_and_recolors() {
        let mut p = Particle {
            position: Vec3::new(10.01, -3.0, 4.0),
            color: Vec4::ONE,
        };
        p.collapse(1e-6, 0.25);

        assert!((p.position.x - 10.01e-6).abs() < 1e-10);
        assert!((p.position.y + 3.0e-6).abs() < 1e-10);
        assert_eq!(p.color.truncate(), hsv_to_rgb(0.25, 1.0, 1.0));
        assert_eq!(p.color.w, 1.0);
    }

    #[test]
    fn test_write_gpu_layout() {
        assert_eq!(std::mem::size_of::<ParticleGpu>(), 32);

        let mut rng = SmallRng::seed_from_u64(3);
        let buffer = ParticleBuffer::spawn_with_rng(&mut rng, 8, 0.8, 0.7);
        let mut out = Vec::new();
        buffer.write_gpu(&mut out);

        assert_eq!(out.len(), 8);
        assert_eq!(out[3].position, buffer.position(3).to_array());
        assert_eq!(out[3].color, buffer.color(3).to_array());
    }

    #[test]
    fn test_hsv_to_rgb_red() {
        let red = hsv_to_rgb(0.0, 1.0, 1.0);
        assert!((red.x - 1.0).abs() < 0.001);
        assert!(red.y < 0.001);
        assert!(red.z < 0.001);
    }
}
