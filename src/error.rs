//! Error types for cloud setup and rendering.
//!
//! GPU initialization, mask loading, and event-loop creation can all fail
//! before the first frame; these types carry those failures out to `main`.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(f, "No compatible GPU adapter found. Ensure your system has a GPU with Vulkan/Metal/DX12 support."),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while loading an alpha mask from a file.
#[derive(Debug)]
pub enum MaskError {
    /// Failed to decode the image file.
    ImageLoad(image::ImageError),
    /// Failed to read the file from disk.
    Io(std::io::Error),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::ImageLoad(e) => write!(f, "Failed to load mask image: {}", e),
            MaskError::Io(e) => write!(f, "Failed to read mask file: {}", e),
        }
    }
}

impl std::error::Error for MaskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MaskError::ImageLoad(e) => Some(e),
            MaskError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for MaskError {
    fn from(e: image::ImageError) -> Self {
        MaskError::ImageLoad(e)
    }
}

impl From<std::io::Error> for MaskError {
    fn from(e: std::io::Error) -> Self {
        MaskError::Io(e)
    }
}

/// Errors that can occur when running a cloud.
#[derive(Debug)]
pub enum CloudError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Alpha mask loading failed.
    Mask(MaskError),
}

impl fmt::Display for CloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloudError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            CloudError::Window(e) => write!(f, "Failed to create window: {}", e),
            CloudError::Gpu(e) => write!(f, "GPU error: {}", e),
            CloudError::Mask(e) => write!(f, "Mask error: {}", e),
        }
    }
}

impl std::error::Error for CloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CloudError::EventLoop(e) => Some(e),
            CloudError::Window(e) => Some(e),
            CloudError::Gpu(e) => Some(e),
            CloudError::Mask(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for CloudError {
    fn from(e: winit::error::EventLoopError) -> Self {
        CloudError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for CloudError {
    fn from(e: winit::error::OsError) -> Self {
        CloudError::Window(e)
    }
}

impl From<GpuError> for CloudError {
    fn from(e: GpuError) -> Self {
        CloudError::Gpu(e)
    }
}

impl From<MaskError> for CloudError {
    fn from(e: MaskError) -> Self {
        CloudError::Mask(e)
    }
}
