// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::mode::Mode;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Template file location
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatesConfig {
    /// Directory holding the five template JSON files
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub default_mode: Mode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsageConfig {
    #[serde(default = "default_track")]
    pub track: bool,
}

fn default_track() -> bool {
    true
}

impl Default for UsageConfig {
    fn default() -> Self {
        UsageConfig {
            track: default_track(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub usage: UsageConfig,
}
