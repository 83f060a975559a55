// Startup errors
// Anything that can stop the application before the event loop runs.

use crate::config::ConfigError;
use crate::engine::typewriter::TypewriterError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid typewriter settings: {0}")]
    Typewriter(#[from] TypewriterError),

    #[error("event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("surface reports no usable format or alpha mode")]
    NoSurfaceFormat,

    #[error("failed to acquire GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
