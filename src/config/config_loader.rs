use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;
use crate::error::FriendError;

const CONFIG_DIR: &str = "friendai";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user configuration, falling back to defaults
pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    load_config_from_path(&path)
}

/// Load configuration from `path`
///
/// A missing file yields defaults silently; an unreadable or invalid file
/// yields defaults with a warning.
pub fn load_config_from_path(path: &Path) -> Config {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            log::warn!("Could not read {}: {}; using defaults", path.display(), e);
            return Config::default();
        }
    };

    parse_config_toml(&contents).unwrap_or_else(|e| {
        log::warn!("{} in {}; using defaults", e, path.display());
        Config::default()
    })
}

pub fn parse_config_toml(content: &str) -> Result<Config, FriendError> {
    toml::from_str(content).map_err(|e| FriendError::Config(e.message().to_string()))
}

#[cfg(test)]
#[path = "config_loader_tests.rs"]
mod config_loader_tests;
