// Simulation controller
//
// Sits between the host's lifecycle/input events and the graphics backend.
// Owns backend selection (Vulkan first, OpenGL ES fallback) and the list of
// touch emitters registered since the last frame.

use std::sync::Arc;

use crate::backend::{BackendError, BackendFactory, BackendKind, GraphicsBackend, attempt_plan};
use crate::diagnostics::{Component, DiagnosticsSink};
use crate::emitter::TouchEmitter;

const DEFAULT_AI_STRENGTH: f32 = 1.0;

/// What happened during [`SimulationController::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The backend advanced one frame.
    Advanced(BackendKind),
    /// No backend could be created; the frame was dropped.
    NoBackend,
    /// The backend reported an error; it stays in place for the next frame.
    Failed(BackendError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    /// Frames a backend actually advanced.
    pub frames: u64,
    pub last_dt: f32,
    pub fps: f32,
}

impl FrameStats {
    fn record(&mut self, dt: f32) {
        self.frames += 1;
        self.last_dt = dt;
        self.fps = if dt > 0.0 { 1.0 / dt } else { 0.0 };
    }
}

pub struct SimulationController {
    width: u32,
    height: u32,
    initialized: bool,
    prefer_vulkan: bool,
    ai_strength: f32,
    stats: FrameStats,
    backend: Option<Box<dyn GraphicsBackend>>,
    emitters: Vec<TouchEmitter>,
    factory: Box<dyn BackendFactory>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl SimulationController {
    pub fn new(factory: Box<dyn BackendFactory>, sink: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            width: 0,
            height: 0,
            initialized: false,
            prefer_vulkan: false,
            ai_strength: DEFAULT_AI_STRENGTH,
            stats: FrameStats::default(),
            backend: None,
            emitters: Vec::new(),
            factory,
            sink,
        }
    }

    pub fn initialize(&mut self, width: u32, height: u32, prefer_vulkan: bool) {
        self.width = width;
        self.height = height;
        self.prefer_vulkan = prefer_vulkan;
        // Only a backend created by this call gets resized. Re-initializing
        // with new dimensions leaves an existing backend at its old size,
        // which is probably a bug, but the host has not asked for a resize
        // path yet.
        if self.ensure_backend() {
            if let Some(backend) = self.backend.as_mut() {
                backend.resize(self.width, self.height);
            }
        }
        self.initialized = true;
    }

    pub fn register_touch(&mut self, x: f32, y: f32, dx: f32, dy: f32, color: u32) {
        if !self.initialized {
            self.sink.warn(Component::FluidController, "Touch before init");
            return;
        }
        let emitter = TouchEmitter::new(x, y, dx, dy, color);
        self.emitters.push(emitter);
        if let Some(backend) = self.backend.as_mut() {
            backend.add_touch_emitter(&emitter);
        }
    }

    pub fn update(&mut self, dt: f32) -> FrameOutcome {
        if self.backend.is_none() {
            self.ensure_backend();
        }
        let outcome = match self.backend.as_mut() {
            Some(backend) => match backend.update_frame(dt, self.ai_strength) {
                Ok(()) => {
                    self.stats.record(dt);
                    FrameOutcome::Advanced(backend.kind())
                }
                Err(err) => {
                    self.sink.error(Component::FluidController, err.to_string());
                    FrameOutcome::Failed(err)
                }
            },
            None => FrameOutcome::NoBackend,
        };
        self.emitters.clear();
        outcome
    }

    pub fn set_ai_strength(&mut self, value: f32) {
        self.ai_strength = value;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn prefers_vulkan(&self) -> bool {
        self.prefer_vulkan
    }

    pub fn ai_strength(&self) -> f32 {
        self.ai_strength
    }

    pub fn backend_kind(&self) -> Option<BackendKind> {
        self.backend.as_ref().map(|backend| backend.kind())
    }

    /// Emitters registered since the last frame.
    pub fn pending_emitters(&self) -> &[TouchEmitter] {
        &self.emitters
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Creates a backend if there is none. Returns true if one was created.
    ///
    /// The preference is only consulted here, so once a backend exists later
    /// changes to it have no effect.
    fn ensure_backend(&mut self) -> bool {
        if self.backend.is_some() {
            return false;
        }
        for &kind in attempt_plan(self.prefer_vulkan) {
            match self.factory.create(kind, self.sink.clone()) {
                Ok(backend) => {
                    self.backend = Some(backend);
                    return true;
                }
                Err(err) if kind == BackendKind::Vulkan => {
                    log::debug!("{}", err);
                    self.sink
                        .warn(Component::FluidController, "Falling back to OpenGL context");
                }
                Err(err) => log::debug!("{}", err),
            }
        }
        self.sink.error(
            Component::FluidController,
            "Unable to create any graphics context",
        );
        false
    }
}
