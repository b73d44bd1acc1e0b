// Graphics backends
//
// Every backend exposes the same three operations. Both concrete backends
// are placeholders for now: they report the calls they receive and do no
// GPU work.

pub mod gl;
pub mod select;
pub mod vulkan;

use std::fmt;

use crate::emitter::TouchEmitter;

pub use gl::GlContext;
pub use select::{BackendFactory, Capabilities, PlatformFactory, attempt_plan, select_backend};
pub use vulkan::VulkanContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    OpenGl,
    Vulkan,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::OpenGl => f.write_str("OpenGL ES"),
            BackendKind::Vulkan => f.write_str("Vulkan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    /// The graphics API cannot be used on this device or platform.
    #[error("{0} is not available on this platform")]
    Unavailable(BackendKind),
    /// The backend exists but failed to advance a frame.
    #[error("{kind} frame update failed: {reason}")]
    Frame { kind: BackendKind, reason: String },
}

pub trait GraphicsBackend: Send {
    fn kind(&self) -> BackendKind;

    fn resize(&mut self, width: u32, height: u32);

    fn add_touch_emitter(&mut self, emitter: &TouchEmitter);

    fn update_frame(&mut self, dt: f32, ai_strength: f32) -> Result<(), BackendError>;
}
