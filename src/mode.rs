//! Suggestion modes
//!
//! A mode selects which template pools are drawn from and how many
//! suggestions come back. Modes are chosen by the caller and never
//! changed by the engine.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FriendError;

/// Number of suggestions drawn for warm and confident replies
pub const REPLY_SAMPLE_SIZE: usize = 4;
/// Number of suggestions drawn for simple replies and small-talk starters
pub const SHORT_SAMPLE_SIZE: usize = 5;
/// Number of calming scripts drawn in calm mode
pub const CALM_SCRIPT_COUNT: usize = 2;
/// Number of quick calms drawn in calm mode
pub const QUICK_CALM_COUNT: usize = 3;

/// User-selected suggestion category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Warm,
    Confident,
    Simple,
    Smalltalk,
    Calm,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Warm,
        Mode::Confident,
        Mode::Simple,
        Mode::Smalltalk,
        Mode::Calm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Warm => "warm",
            Mode::Confident => "confident",
            Mode::Simple => "simple",
            Mode::Smalltalk => "smalltalk",
            Mode::Calm => "calm",
        }
    }

    /// Total number of suggestions a generation in this mode asks for
    pub fn sample_size(&self) -> usize {
        match self {
            Mode::Warm | Mode::Confident => REPLY_SAMPLE_SIZE,
            Mode::Simple | Mode::Smalltalk => SHORT_SAMPLE_SIZE,
            Mode::Calm => CALM_SCRIPT_COUNT + QUICK_CALM_COUNT,
        }
    }

    /// Whether the detected context of the message shapes the pool
    pub fn uses_context(&self) -> bool {
        matches!(self, Mode::Warm | Mode::Confident)
    }

    /// Whether the front end should insist on a pasted message
    pub fn requires_message(&self) -> bool {
        !matches!(self, Mode::Smalltalk | Mode::Calm)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FriendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warm" => Ok(Mode::Warm),
            "confident" => Ok(Mode::Confident),
            "simple" => Ok(Mode::Simple),
            "smalltalk" | "small-talk" => Ok(Mode::Smalltalk),
            "calm" => Ok(Mode::Calm),
            _ => Err(FriendError::InvalidMode(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod mode_tests;
