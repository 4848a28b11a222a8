use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::core::Color;

/// Startup settings for a palette view.
///
/// Missing fields take their defaults. A `base_color` which does not parse is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base color shown before the user picks one
    pub base_color: Color,
    /// Fade between two palettes, in milliseconds
    pub transition_ms: u64,
    /// How long a notification stays on screen, in seconds
    pub notification_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_color: Color::from_u32(0x3498db),
            transition_ms: 300,
            notification_secs: 5.0,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Malformed palette config")?;

        if let Err(err) = Duration::try_from_secs_f32(config.notification_secs) {
            anyhow::bail!(
                "notification_secs must be a non-negative number of seconds, got {}: {err}",
                config.notification_secs
            );
        }

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        Self::from_json(&json).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Saturates for lifetimes [`Config::from_json`] would reject
    pub fn notification_lifetime(&self) -> Duration {
        match Duration::try_from_secs_f32(self.notification_secs) {
            Ok(lifetime) => lifetime,
            Err(_) if self.notification_secs > 0.0 => Duration::MAX,
            Err(_) => Duration::ZERO,
        }
    }
}
