//! Cloud builder and runner.

use std::path::PathBuf;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::camera::Camera;
use crate::error::CloudError;
use crate::mask;
use crate::mask::AlphaMask;
use crate::particle::ParticleBuffer;
use crate::sim::Outflow;
use crate::window::App;

/// A particle cloud builder.
///
/// Use method chaining to configure, then call `.run()` to start.
///
/// ```ignore
/// Cloud::new()
///     .with_particle_count(80_000)
///     .with_bounds(10.0)
///     .run()?;
/// ```
pub struct Cloud {
    particle_count: u32,
    bounds: f32,
    step: f32,
    shrink: f32,
    cloud_radius: f32,
    initial_hue: f32,
    hue_rate: f32,
    max_half: f32,
    mask_size: u32,
    mask_sharpness: f32,
    mask_image: Option<PathBuf>,
    camera_distance: Option<f32>,
    title: String,
}

impl Cloud {
    /// Create a new cloud with default settings.
    pub fn new() -> Self {
        Self {
            particle_count: 80_000,
            bounds: 10.0,
            step: 0.01,
            shrink: 1e-6,
            cloud_radius: 0.8,
            initial_hue: 0.7,
            hue_rate: 0.05,
            max_half: 0.2,
            mask_size: 256,
            mask_sharpness: mask::DEFAULT_SHARPNESS,
            mask_image: None,
            camera_distance: None,
            title: "nova".to_string(),
        }
    }

    /// Set the number of particles. Fixed for the whole run.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the bounding cube half-size (cube from -bounds to +bounds).
    pub fn with_bounds(mut self, bounds: f32) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the per-frame travel distance of each particle.
    pub fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Set the scale factor applied on boundary collapse.
    pub fn with_shrink(mut self, shrink: f32) -> Self {
        self.shrink = shrink;
        self
    }

    /// Set the radius of the spawn sphere.
    pub fn with_cloud_radius(mut self, radius: f32) -> Self {
        self.cloud_radius = radius;
        self
    }

    /// Set the hue every particle starts with (0.0 to 1.0).
    pub fn with_initial_hue(mut self, hue: f32) -> Self {
        self.initial_hue = hue;
        self
    }

    /// Set the respawn hue drift in cycles per second of elapsed time.
    pub fn with_hue_rate(mut self, rate: f32) -> Self {
        self.hue_rate = rate;
        self
    }

    /// Set the largest sprite half-extent, in view-space units.
    pub fn with_sprite_size(mut self, max_half: f32) -> Self {
        self.max_half = max_half;
        self
    }

    /// Set the resolution of the generated alpha mask (size x size).
    pub fn with_mask_size(mut self, size: u32) -> Self {
        self.mask_size = size;
        self
    }

    /// Set the falloff sharpness of the generated alpha mask.
    pub fn with_mask_sharpness(mut self, sharpness: f32) -> Self {
        self.mask_sharpness = sharpness;
        self
    }

    /// Load the alpha mask from a grayscale image instead of generating it.
    pub fn with_mask_image(mut self, path: impl Into<PathBuf>) -> Self {
        self.mask_image = Some(path.into());
        self
    }

    /// Set the camera orbit distance. Defaults to a distance that frames
    /// the whole bounding cube.
    pub fn with_camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = Some(distance);
        self
    }

    /// Set the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the cloud. Blocks until the window is closed.
    pub fn run(self) -> Result<(), CloudError> {
        let mask = match &self.mask_image {
            Some(path) => AlphaMask::from_image(path)?,
            None => AlphaMask::build(self.mask_size, self.mask_size, self.mask_sharpness),
        };

        let particles =
            ParticleBuffer::spawn(self.particle_count, self.cloud_radius, self.initial_hue);

        let outflow = Outflow {
            step: self.step,
            bounds: self.bounds,
            shrink: self.shrink,
            hue_rate: self.hue_rate,
        };

        let mut camera = Camera::new();
        camera.distance = self.camera_distance.unwrap_or(2.2 * self.bounds);

        log::info!(
            "starting cloud: {} particles, bounds {}, {}x{} mask",
            self.particle_count,
            self.bounds,
            mask.width(),
            mask.height()
        );

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(
            self.title,
            mask,
            particles,
            outflow,
            camera,
            self.max_half,
        );
        event_loop.run_app(&mut app)?;

        match app.take_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for Cloud {
    fn default() -> Self {
        Self::new()
    }
}
