//! Demo configuration.
//!
//! The demo optionally reads `segtab.yaml` for its tab set, default tab,
//! and frame period. A missing file means the built-in document-workflow
//! tabs; a present-but-broken file is an error so typos don't silently
//! fall back.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_tabs")]
    pub tabs: Vec<String>,
    #[serde(default)]
    pub default_tab: Option<String>,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tabs: default_tabs(),
            default_tab: Some("All".to_string()),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl DemoConfig {
    /// Frame period for the event-loop poll; clamped away from zero so a
    /// bad config can't spin the loop.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

fn default_tabs() -> Vec<String> {
    ["All", "Draft", "Review", "Signing", "Signed"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_tick_rate_ms() -> u64 {
    16
}

/// Returns the config directory path for segtab.
/// Checks `$XDG_CONFIG_HOME` first (cross-platform), then falls back to
/// platform-native config via `dirs::config_dir()`, then `~/.config`.
pub fn get_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("segtab")
}

fn default_config_file() -> PathBuf {
    get_config_dir().join("segtab.yaml")
}

/// Loads the demo configuration from `path`, or from the platform config
/// dir when no path is given. A missing file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_file);

    if !path.exists() {
        return Ok(DemoConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: DemoConfig = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}
