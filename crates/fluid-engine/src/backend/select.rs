// Backend selection
//
// The fallback policy is a pure function of the caller's preference and the
// graphics APIs available. Construction itself goes through a factory so the
// controller can be driven by fake backends.

use std::sync::Arc;

use super::{BackendError, BackendKind, GlContext, GraphicsBackend, VulkanContext};
use crate::diagnostics::DiagnosticsSink;

/// Which graphics APIs can be used in the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub vulkan: bool,
    pub opengl: bool,
}

impl Capabilities {
    /// Vulkan is only attempted on Android; OpenGL ES is assumed everywhere.
    pub fn detect() -> Self {
        Self {
            vulkan: cfg!(target_os = "android"),
            opengl: true,
        }
    }

    pub fn supports(&self, kind: BackendKind) -> bool {
        match kind {
            BackendKind::Vulkan => self.vulkan,
            BackendKind::OpenGl => self.opengl,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// Backends to try, in order.
pub fn attempt_plan(prefer_vulkan: bool) -> &'static [BackendKind] {
    if prefer_vulkan {
        &[BackendKind::Vulkan, BackendKind::OpenGl]
    } else {
        &[BackendKind::OpenGl]
    }
}

/// The backend the fallback policy ends up with, or `None` if nothing in the
/// plan is available.
pub fn select_backend(prefer_vulkan: bool, capabilities: &Capabilities) -> Option<BackendKind> {
    attempt_plan(prefer_vulkan)
        .iter()
        .copied()
        .find(|kind| capabilities.supports(*kind))
}

pub trait BackendFactory: Send {
    fn create(
        &self,
        kind: BackendKind,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Result<Box<dyn GraphicsBackend>, BackendError>;
}

/// Builds the real backends for the capabilities it was given.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformFactory {
    capabilities: Capabilities,
}

impl PlatformFactory {
    pub fn new(capabilities: Capabilities) -> Self {
        Self { capabilities }
    }
}

impl BackendFactory for PlatformFactory {
    fn create(
        &self,
        kind: BackendKind,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Result<Box<dyn GraphicsBackend>, BackendError> {
        match kind {
            BackendKind::Vulkan => Ok(Box::new(VulkanContext::new(&self.capabilities, sink)?)),
            BackendKind::OpenGl if self.capabilities.opengl => Ok(Box::new(GlContext::new(sink))),
            BackendKind::OpenGl => Err(BackendError::Unavailable(BackendKind::OpenGl)),
        }
    }
}
