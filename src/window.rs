use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{Window, WindowId},
};

use crate::camera::Camera;
use crate::error::CloudError;
use crate::frame::FrameState;
use crate::gpu::GpuState;
use crate::mask::AlphaMask;
use crate::particle::{ParticleBuffer, ParticleGpu};
use crate::sim::Outflow;
use crate::time::Time;

pub(crate) struct App {
    title: String,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    mask: AlphaMask,
    camera: Camera,
    particles: ParticleBuffer,
    scratch: Vec<ParticleGpu>,
    outflow: Outflow,
    frame: FrameState,
    time: Time,
    max_half: f32,
    error: Option<CloudError>,
}

impl App {
    pub(crate) fn new(
        title: String,
        mask: AlphaMask,
        particles: ParticleBuffer,
        outflow: Outflow,
        camera: Camera,
        max_half: f32,
    ) -> Self {
        Self {
            title,
            window: None,
            gpu: None,
            mask,
            camera,
            particles,
            scratch: Vec::new(),
            outflow,
            frame: FrameState::new(),
            time: Time::new(),
            max_half,
            error: None,
        }
    }

    /// Setup failure recorded inside the event loop, if any.
    pub(crate) fn take_error(&mut self) -> Option<CloudError> {
        self.error.take()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("window creation failed: {e}");
                self.error = Some(CloudError::Window(e));
                event_loop.exit();
                return;
            }
        };

        self.particles.write_gpu(&mut self.scratch);
        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            &self.mask,
            bytemuck::cast_slice(&self.scratch),
            self.particles.len() as u32,
            self.camera.clone(),
        ));

        match gpu {
            Ok(gpu) => {
                self.window = Some(window);
                self.gpu = Some(gpu);
            }
            Err(e) => {
                log::error!("GPU initialization failed: {e}");
                self.error = Some(CloudError::Gpu(e));
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(gpu) = &mut self.gpu {
                    // Animate, then draw: the draw reads the buffer the
                    // simulation step just wrote.
                    let (_, dt) = self.time.update();
                    self.frame.tick(dt, self.max_half);
                    self.outflow
                        .advance(self.particles.as_mut_slice(), &self.frame, dt);

                    self.particles.write_gpu(&mut self.scratch);
                    gpu.upload_particles(bytemuck::cast_slice(&self.scratch));

                    match gpu.render(self.frame.half_size, self.frame.elapsed as f32) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            })
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::warn!("render error: {:?}", e),
                    }

                    if self.time.frame() % 240 == 0 {
                        log::debug!(
                            "{:.1} fps, {} particles",
                            self.time.fps(),
                            self.particles.len()
                        );
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
