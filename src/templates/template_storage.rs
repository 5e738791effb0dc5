use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::template_set::{AuxiliaryKey, TemplateBundle, TemplateSet};
use crate::context::Context;
use crate::error::FriendError;

const CONFIG_DIR: &str = "friendai";
const TEMPLATES_DIR: &str = "templates";

pub const WARM_FILE: &str = "warm_replies.json";
pub const CONFIDENT_FILE: &str = "confident_replies.json";
pub const SIMPLE_FILE: &str = "simple_replies.json";
pub const SMALLTALK_FILE: &str = "smalltalk_starters.json";
pub const CALM_FILE: &str = "calm_scripts.json";

const CONTEXT_KEYS: [Context; 4] = [
    Context::Compliment,
    Context::Question,
    Context::Meeting,
    Context::Favor,
];

#[derive(Deserialize)]
struct ReplyPayload {
    responses: Vec<String>,
    #[serde(default)]
    context: HashMap<String, Vec<String>>,
}

#[derive(Deserialize)]
struct SimplePayload {
    responses: Vec<String>,
    yes_variants: Vec<String>,
}

#[derive(Deserialize)]
struct SmalltalkPayload {
    starters: Vec<String>,
}

#[derive(Deserialize)]
struct CalmPayload {
    scripts: Vec<String>,
    quick_calms: Vec<String>,
}

impl ReplyPayload {
    fn into_set(mut self) -> TemplateSet {
        let mut set = TemplateSet::new(self.responses);
        for context in CONTEXT_KEYS {
            let Some(key) = context.key() else { continue };
            if let Some(items) = self.context.remove(key) {
                set = set.with_contextual(context, items);
            }
        }
        for unknown in self.context.keys() {
            log::debug!("Ignoring unknown template context '{}'", unknown);
        }
        set
    }
}

impl SimplePayload {
    fn into_set(self) -> TemplateSet {
        TemplateSet::new(self.responses).with_auxiliary(AuxiliaryKey::YesVariants, self.yes_variants)
    }
}

impl SmalltalkPayload {
    fn into_set(self) -> TemplateSet {
        TemplateSet::new(self.starters.clone()).with_auxiliary(AuxiliaryKey::Starters, self.starters)
    }
}

impl CalmPayload {
    fn into_set(self) -> TemplateSet {
        TemplateSet::new(self.scripts.clone())
            .with_auxiliary(AuxiliaryKey::Scripts, self.scripts)
            .with_auxiliary(AuxiliaryKey::QuickCalms, self.quick_calms)
    }
}

/// Default location of user-provided template files
pub fn templates_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(TEMPLATES_DIR))
}

/// Load all five template files from `dir`
///
/// Any missing file, unreadable file, malformed payload or missing
/// required field fails the whole bundle.
pub async fn load_bundle_from_dir(dir: &Path) -> Result<TemplateBundle, FriendError> {
    let warm: ReplyPayload = read_payload(dir, WARM_FILE).await?;
    let confident: ReplyPayload = read_payload(dir, CONFIDENT_FILE).await?;
    let simple: SimplePayload = read_payload(dir, SIMPLE_FILE).await?;
    let smalltalk: SmalltalkPayload = read_payload(dir, SMALLTALK_FILE).await?;
    let calm: CalmPayload = read_payload(dir, CALM_FILE).await?;

    Ok(TemplateBundle {
        warm: warm.into_set(),
        confident: confident.into_set(),
        simple: simple.into_set(),
        smalltalk: smalltalk.into_set(),
        calm: calm.into_set(),
    })
}

/// Parse the template files shipped in the repository's `templates/`
/// directory, which are compiled into the binary
pub fn shipped_bundle() -> Result<TemplateBundle, FriendError> {
    let warm: ReplyPayload = parse_payload(
        WARM_FILE,
        include_str!("../../templates/warm_replies.json"),
    )?;
    let confident: ReplyPayload = parse_payload(
        CONFIDENT_FILE,
        include_str!("../../templates/confident_replies.json"),
    )?;
    let simple: SimplePayload = parse_payload(
        SIMPLE_FILE,
        include_str!("../../templates/simple_replies.json"),
    )?;
    let smalltalk: SmalltalkPayload = parse_payload(
        SMALLTALK_FILE,
        include_str!("../../templates/smalltalk_starters.json"),
    )?;
    let calm: CalmPayload = parse_payload(
        CALM_FILE,
        include_str!("../../templates/calm_scripts.json"),
    )?;

    Ok(TemplateBundle {
        warm: warm.into_set(),
        confident: confident.into_set(),
        simple: simple.into_set(),
        smalltalk: smalltalk.into_set(),
        calm: calm.into_set(),
    })
}

async fn read_payload<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, FriendError> {
    let contents = tokio::fs::read_to_string(dir.join(file))
        .await
        .map_err(|e| FriendError::TemplateLoad {
            file: file.to_string(),
            reason: e.to_string(),
        })?;

    parse_payload(file, &contents)
}

fn parse_payload<T: DeserializeOwned>(file: &str, contents: &str) -> Result<T, FriendError> {
    serde_json::from_str(contents).map_err(|e| FriendError::TemplateLoad {
        file: file.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
#[path = "template_storage_tests.rs"]
mod template_storage_tests;
