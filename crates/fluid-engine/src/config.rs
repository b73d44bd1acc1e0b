// Engine configuration
//
// Stored as JSON. Every field has a default so partial files are fine and
// the device build can run without any file at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Logcat tag for records that don't carry a component target.
    pub log_tag: String,
    /// Maximum log level: "error", "warn", "info", "debug" or "trace".
    pub log_level: String,
    /// Preference used by the harness when `--vulkan` is not given.
    pub prefer_vulkan: bool,
    /// AI strength before the host sets one.
    pub initial_ai_strength: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_tag: "FluidEngine".to_string(),
            log_level: "info".to_string(),
            prefer_vulkan: true,
            initial_ai_strength: 1.0,
        }
    }
}

impl EngineConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Like [`EngineConfig::load`], but a missing or broken file only costs a
    /// warning.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            log::warn!("Failed to load config: {err:#}, falling back to default");
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// `log_level` parsed into a filter; unknown values mean `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
