//! Local usage counter
//!
//! Counts successful generations and hands out a word of encouragement at
//! a few milestones. Stored as JSON next to the configuration.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FriendError;

const CONFIG_DIR: &str = "friendai";
const USAGE_FILE: &str = "usage.json";

const MILESTONES: &[(u64, &str)] = &[
    (1, "🎉 First message! You're doing great!"),
    (10, "🌟 10 messages generated! You're building confidence!"),
    (50, "💪 50 messages! Social anxiety doesn't stand a chance!"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageStats {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub last_used: Option<DateTime<Utc>>,
}

impl UsageStats {
    /// Count one generation, returning the milestone message if one was hit
    pub fn record(&mut self, now: DateTime<Utc>) -> Option<&'static str> {
        self.count = self.count.saturating_add(1);
        self.last_used = Some(now);
        milestone_message(self.count)
    }
}

pub fn milestone_message(count: u64) -> Option<&'static str> {
    MILESTONES
        .iter()
        .find(|(milestone, _)| *milestone == count)
        .map(|(_, message)| *message)
}

pub fn usage_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(USAGE_FILE))
}

/// Read stats from `path`; a missing or corrupt file starts from zero
pub fn load_usage_from_path(path: &Path) -> UsageStats {
    let Ok(contents) = fs::read_to_string(path) else {
        return UsageStats::default();
    };

    serde_json::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("Ignoring corrupt usage file {}: {}", path.display(), e);
        UsageStats::default()
    })
}

pub fn save_usage_to_path(path: &Path, stats: &UsageStats) -> Result<(), FriendError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(stats).map_err(|e| FriendError::Io(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

/// Record one generation in the usage file at `path`
///
/// Persistence failures are logged and otherwise ignored.
pub fn track_usage_at(path: &Path) -> Option<&'static str> {
    let mut stats = load_usage_from_path(path);
    let milestone = stats.record(Utc::now());

    if let Err(e) = save_usage_to_path(path, &stats) {
        log::warn!("Could not save usage count: {}", e);
    }
    if let Some(message) = milestone {
        log::info!("Usage milestone reached at {} generations", stats.count);
        return Some(message);
    }
    None
}

/// Record one generation in the default usage file
pub fn track_usage() -> Option<&'static str> {
    usage_path().and_then(|path| track_usage_at(&path))
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod usage_tests;
