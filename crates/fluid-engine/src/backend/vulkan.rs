use std::sync::Arc;

use super::{BackendError, BackendKind, Capabilities, GraphicsBackend};
use crate::diagnostics::{Component, DiagnosticsSink};
use crate::emitter::TouchEmitter;

/// Vulkan backend. Only constructible where the loader is expected to work.
pub struct VulkanContext {
    sink: Arc<dyn DiagnosticsSink>,
    size: (u32, u32),
}

impl VulkanContext {
    /// Fails with [`BackendError::Unavailable`] when `capabilities` has no
    /// Vulkan, which lets the controller fall back to OpenGL ES.
    pub fn new(
        capabilities: &Capabilities,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Result<Self, BackendError> {
        if !capabilities.vulkan {
            return Err(BackendError::Unavailable(BackendKind::Vulkan));
        }
        Ok(Self { sink, size: (0, 0) })
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl GraphicsBackend for VulkanContext {
    fn kind(&self) -> BackendKind {
        BackendKind::Vulkan
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.sink
            .info(Component::VulkanContext, format!("Resize {}x{}", width, height));
    }

    fn add_touch_emitter(&mut self, emitter: &TouchEmitter) {
        self.sink.info(
            Component::VulkanContext,
            format!("Emitter at ({:.6},{:.6})", emitter.x, emitter.y),
        );
    }

    fn update_frame(&mut self, dt: f32, ai_strength: f32) -> Result<(), BackendError> {
        self.sink.trace(
            Component::VulkanContext,
            format!("Frame dt={:.6} ai={:.6}", dt, ai_strength),
        );
        // TODO: dispatch the advection/pressure compute passes once the
        // Vulkan pipeline exists.
        Ok(())
    }
}
