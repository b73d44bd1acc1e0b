use std::sync::Arc;

use super::{BackendError, BackendKind, GraphicsBackend};
use crate::diagnostics::{Component, DiagnosticsSink};
use crate::emitter::TouchEmitter;

/// OpenGL ES backend. Always constructible.
pub struct GlContext {
    sink: Arc<dyn DiagnosticsSink>,
    size: (u32, u32),
}

impl GlContext {
    pub fn new(sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self { sink, size: (0, 0) }
    }

    /// Last size passed to [`GraphicsBackend::resize`].
    pub fn size(&self) -> (u32, u32) {
        self.size
    }
}

impl GraphicsBackend for GlContext {
    fn kind(&self) -> BackendKind {
        BackendKind::OpenGl
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.sink
            .info(Component::GlContext, format!("Resize {}x{}", width, height));
    }

    fn add_touch_emitter(&mut self, emitter: &TouchEmitter) {
        self.sink.info(
            Component::GlContext,
            format!("Emitter at ({:.6},{:.6})", emitter.x, emitter.y),
        );
    }

    fn update_frame(&mut self, dt: f32, ai_strength: f32) -> Result<(), BackendError> {
        self.sink.trace(
            Component::GlContext,
            format!("Frame dt={:.6} ai={:.6}", dt, ai_strength),
        );
        // OpenGL ES compute fallback goes here.
        Ok(())
    }
}
