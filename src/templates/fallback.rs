//! Built-in template bundle
//!
//! Installed whenever the template files cannot be loaded. Every list a
//! mode draws from is populated, so all modes keep working after a
//! fallback.

use super::template_set::{AuxiliaryKey, TemplateBundle, TemplateSet};

const WARM_RESPONSES: &[&str] = &[
    "That sounds lovely! I'd really enjoy that 😊",
    "I'd love to! Thanks so much for thinking of me.",
    "Yes! That would be wonderful.",
    "Absolutely! That sounds like so much fun.",
];

const CONFIDENT_RESPONSES: &[&str] = &[
    "Sounds good! I'm in.",
    "Yes, let's do it.",
    "Count me in!",
    "That works for me.",
];

const SIMPLE_RESPONSES: &[&str] = &["Sure!", "Yes, that works.", "Sounds good!", "I'm in."];

const SIMPLE_YES_VARIANTS: &[&str] = &[
    "Yes!",
    "Yes, definitely.",
    "Yep, sounds good.",
    "Yes, I'd like that.",
    "For sure!",
];

const SMALLTALK_STARTERS: &[&str] = &[
    "How's your week going?",
    "What have you been up to?",
    "How have you been?",
    "What's new with you?",
];

const CALM_SCRIPTS: &[&str] = &[
    "Take a breath. You've got this. They reached out because they want to connect with you.",
    "It's okay to feel nervous. Whatever you send will be appreciated.",
    "Pause. Breathe. You don't have to be perfect.",
];

const QUICK_CALMS: &[&str] = &[
    "Breathe in for four, out for six.",
    "Short and kind is enough.",
    "One message at a time.",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the built-in bundle
pub fn builtin_bundle() -> TemplateBundle {
    TemplateBundle {
        warm: TemplateSet::new(owned(WARM_RESPONSES)),
        confident: TemplateSet::new(owned(CONFIDENT_RESPONSES)),
        simple: TemplateSet::new(owned(SIMPLE_RESPONSES))
            .with_auxiliary(AuxiliaryKey::YesVariants, owned(SIMPLE_YES_VARIANTS)),
        smalltalk: TemplateSet::new(owned(SMALLTALK_STARTERS))
            .with_auxiliary(AuxiliaryKey::Starters, owned(SMALLTALK_STARTERS)),
        calm: TemplateSet::new(owned(CALM_SCRIPTS))
            .with_auxiliary(AuxiliaryKey::Scripts, owned(CALM_SCRIPTS))
            .with_auxiliary(AuxiliaryKey::QuickCalms, owned(QUICK_CALMS)),
    }
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod fallback_tests;
