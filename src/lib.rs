//! friendai: pick a few ready-made replies or conversation starters
//!
//! The engine classifies a pasted message, assembles candidate templates
//! for the selected [`Mode`] and samples a handful of them without
//! replacement. Templates come from JSON files or a built-in bundle.

pub mod clipboard;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod mode;
pub mod pool;
pub mod sampler;
pub mod templates;
pub mod usage;

pub use context::{Context, classify};
pub use error::FriendError;
pub use generator::{SuggestionGenerator, generate};
pub use mode::Mode;
pub use templates::{TemplateSource, TemplateStore};
