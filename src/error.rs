//! Platform binding errors
//!
//! The simulation and rasterizer never fail; only the window, GPU and event
//! loop collaborators can, and at startup those failures are fatal.

use thiserror::Error;

/// Errors raised by the window/GPU/input platform binding
#[derive(Error, Debug)]
pub enum PlatformError {
    /// The OS event loop could not be created or pumped.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The OS refused to create the game window.
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    /// The event loop never handed us a window during startup.
    #[error("window was not created during startup")]
    NoWindow,

    /// No drawable surface for the window.
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No GPU adapter compatible with the surface.
    #[error("no compatible GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to open a device.
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// The surface failed in a way a reconfigure cannot fix.
    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}
