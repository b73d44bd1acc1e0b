// Host-facing adapter
//
// Translates the primitive arguments the Android runtime passes in into
// controller calls. Owned explicitly by whoever fronts the host; the JNI
// layer keeps exactly one for the whole process.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::backend::{BackendFactory, PlatformFactory};
use crate::config::EngineConfig;
use crate::controller::SimulationController;
use crate::diagnostics::{Component, DiagnosticsSink, LogSink};

pub struct EngineHost {
    controller: Mutex<SimulationController>,
    sink: Arc<dyn DiagnosticsSink>,
}

impl EngineHost {
    pub fn new(
        config: &EngineConfig,
        factory: Box<dyn BackendFactory>,
        sink: Arc<dyn DiagnosticsSink>,
    ) -> Self {
        let mut controller = SimulationController::new(factory, sink.clone());
        controller.set_ai_strength(config.initial_ai_strength);
        Self {
            controller: Mutex::new(controller),
            sink,
        }
    }

    /// Host for the detected platform, logging through `log`.
    pub fn for_platform(config: &EngineConfig) -> Self {
        Self::new(config, Box::new(PlatformFactory::default()), Arc::new(LogSink))
    }

    pub fn init(&self, width: i32, height: i32, use_vulkan: bool) {
        self.sink.info(
            Component::FluidEngine,
            format!("Init request: {}x{} Vulkan={}", width, height, use_vulkan as u8),
        );
        let width = self.dimension("width", width);
        let height = self.dimension("height", height);
        self.controller().initialize(width, height, use_vulkan);
    }

    /// `color` is a packed ARGB `jint`; its bits are taken as-is.
    pub fn touch(&self, x: f32, y: f32, dx: f32, dy: f32, color: i32) {
        self.controller().register_touch(x, y, dx, dy, color as u32);
    }

    pub fn frame(&self, dt: f32) {
        self.controller().update(dt);
    }

    pub fn set_ai_strength(&self, strength: f32) {
        self.controller().set_ai_strength(strength);
    }

    /// Direct access to the controller, mostly for inspection.
    pub fn controller(&self) -> MutexGuard<'_, SimulationController> {
        // A panic caught at the JNI boundary may have poisoned the lock; the
        // controller state is still usable.
        self.controller.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn dimension(&self, name: &str, value: i32) -> u32 {
        u32::try_from(value).unwrap_or_else(|_| {
            self.sink.warn(
                Component::FluidEngine,
                format!("Negative {} {} clamped to 0", name, value),
            );
            0
        })
    }
}
