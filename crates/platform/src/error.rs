use std::fmt;
use winit::error::EventLoopError;

/// Failures while bringing up or running the window host.
#[derive(Debug)]
pub enum PlatformError {
    EventLoop(EventLoopError),
    Window(String),
    Surface(String),
    Gpu(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::EventLoop(err) => write!(f, "event loop: {err}"),
            PlatformError::Window(msg) => write!(f, "window: {msg}"),
            PlatformError::Surface(msg) => write!(f, "surface: {msg}"),
            PlatformError::Gpu(msg) => write!(f, "gpu: {msg}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlatformError::EventLoop(err) => Some(err),
            _ => None,
        }
    }
}
