//! Immutable per-mode template data
//!
//! Each mode owns one [`TemplateSet`]. Sets are built once by the loader
//! (or the built-in bundle) and only ever read afterwards; pools copy
//! out of them before any reordering happens.

use std::collections::HashMap;

use crate::context::Context;
use crate::mode::Mode;

/// Mode-specific lists that sit beside the base list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxiliaryKey {
    /// Affirmative replies used by simple mode when the message is a question
    YesVariants,
    /// Conversation openers for small talk
    Starters,
    /// Longer calming scripts
    Scripts,
    /// One-line calming reminders
    QuickCalms,
}

impl AuxiliaryKey {
    /// Field name of this list in template payloads
    pub fn field_name(&self) -> &'static str {
        match self {
            AuxiliaryKey::YesVariants => "yes_variants",
            AuxiliaryKey::Starters => "starters",
            AuxiliaryKey::Scripts => "scripts",
            AuxiliaryKey::QuickCalms => "quick_calms",
        }
    }
}

/// Candidate strings for a single mode
///
/// `base` is always present. For small talk it holds the starters and for
/// calm mode the scripts, so every mode has a primary list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    base: Vec<String>,
    contextual: HashMap<Context, Vec<String>>,
    auxiliary: HashMap<AuxiliaryKey, Vec<String>>,
}

impl TemplateSet {
    pub fn new(base: Vec<String>) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    pub fn with_contextual(mut self, context: Context, items: Vec<String>) -> Self {
        self.contextual.insert(context, items);
        self
    }

    pub fn with_auxiliary(mut self, key: AuxiliaryKey, items: Vec<String>) -> Self {
        self.auxiliary.insert(key, items);
        self
    }

    pub fn base(&self) -> &[String] {
        &self.base
    }

    pub fn contextual(&self, context: Context) -> Option<&[String]> {
        self.contextual.get(&context).map(Vec::as_slice)
    }

    pub fn auxiliary(&self, key: AuxiliaryKey) -> Option<&[String]> {
        self.auxiliary.get(&key).map(Vec::as_slice)
    }
}

/// Template sets for every mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateBundle {
    pub warm: TemplateSet,
    pub confident: TemplateSet,
    pub simple: TemplateSet,
    pub smalltalk: TemplateSet,
    pub calm: TemplateSet,
}

impl TemplateBundle {
    pub fn get(&self, mode: Mode) -> &TemplateSet {
        match mode {
            Mode::Warm => &self.warm,
            Mode::Confident => &self.confident,
            Mode::Simple => &self.simple,
            Mode::Smalltalk => &self.smalltalk,
            Mode::Calm => &self.calm,
        }
    }
}
