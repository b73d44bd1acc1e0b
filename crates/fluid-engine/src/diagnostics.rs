// Diagnostics for the native bridge
//
// Nothing that goes wrong inside the engine is reported back to the host.
// Failures become one-way diagnostics tagged with the component that raised
// them. The sink is injectable so tests can assert on what was emitted.

use log::Level;
use std::sync::{Arc, Mutex};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The part of the engine a diagnostic originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    FluidEngine,
    GlContext,
    VulkanContext,
    FluidController,
}

impl Component {
    /// Tag used as the logcat tag / log target.
    pub fn tag(self) -> &'static str {
        match self {
            Component::FluidEngine => "FluidEngine",
            Component::GlContext => "GlContext",
            Component::VulkanContext => "VulkanContext",
            Component::FluidController => "FluidController",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub component: Component,
    pub level: Level,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

pub trait DiagnosticsSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

impl dyn DiagnosticsSink {
    pub fn report(&self, component: Component, level: Level, message: impl Into<String>) {
        self.emit(Diagnostic {
            component,
            level,
            message: message.into(),
        });
    }

    pub fn error(&self, component: Component, message: impl Into<String>) {
        self.report(component, Level::Error, message);
    }

    pub fn warn(&self, component: Component, message: impl Into<String>) {
        self.report(component, Level::Warn, message);
    }

    pub fn info(&self, component: Component, message: impl Into<String>) {
        self.report(component, Level::Info, message);
    }

    pub fn trace(&self, component: Component, message: impl Into<String>) {
        self.report(component, Level::Trace, message);
    }
}

// ---------------------------------------------------------------------------
// Implementations
// ---------------------------------------------------------------------------

/// Forwards every diagnostic to the `log` facade, using the component tag as
/// the target. This is what runs on device.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn emit(&self, diagnostic: Diagnostic) {
        log::log!(
            target: diagnostic.component.tag(),
            diagnostic.level,
            "{}",
            diagnostic.message
        );
    }
}

/// Keeps every diagnostic in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, oldest first.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Whether a diagnostic from `component` at `level` contains `needle`.
    pub fn contains(&self, component: Component, level: Level, needle: &str) -> bool {
        self.lock()
            .iter()
            .any(|d| d.component == component && d.level == level && d.message.contains(needle))
    }

    pub fn count(&self, component: Component, level: Level) -> usize {
        self.lock()
            .iter()
            .filter(|d| d.component == component && d.level == level)
            .count()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl DiagnosticsSink for RecordingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
