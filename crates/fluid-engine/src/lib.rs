// fluid-engine: native side of the fluid simulation
//
// Receives lifecycle and input events from the Android host (init, touch,
// frame, AI strength) and forwards them to a graphics backend chosen with a
// Vulkan-first, OpenGL-fallback policy.

pub mod backend;
pub mod config;
pub mod controller;
pub mod diagnostics;
pub mod emitter;
pub mod host;
pub mod logging;

// JNI exports for com.example.engine.Engine
#[cfg(target_os = "android")]
pub mod android_jni;

pub use backend::{BackendError, BackendKind, Capabilities, GraphicsBackend};
pub use config::EngineConfig;
pub use controller::{FrameOutcome, FrameStats, SimulationController};
pub use diagnostics::{Component, Diagnostic, DiagnosticsSink, LogSink, RecordingSink};
pub use emitter::TouchEmitter;
pub use host::EngineHost;
