//! Candidate pool assembly
//!
//! Turns a mode (plus the detected context and the raw message where the
//! mode cares about them) into the lists that the sampler draws from.
//! Pools are fresh copies built per request.

use crate::context::Context;
use crate::error::FriendError;
use crate::mode::{CALM_SCRIPT_COUNT, Mode, QUICK_CALM_COUNT, REPLY_SAMPLE_SIZE, SHORT_SAMPLE_SIZE};
use crate::templates::{AuxiliaryKey, TemplateStore};

/// One list to sample from and how many items to take from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDraw {
    pub items: Vec<String>,
    pub count: usize,
}

/// Everything a single generation samples from, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionPool {
    pub draws: Vec<PoolDraw>,
}

impl SuggestionPool {
    fn single(items: Vec<String>, count: usize) -> Self {
        Self {
            draws: vec![PoolDraw { items, count }],
        }
    }

    /// All candidates across draws, in order
    pub fn items(&self) -> impl Iterator<Item = &String> {
        self.draws.iter().flat_map(|draw| draw.items.iter())
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the pool for `mode`
///
/// `context` only matters for warm and confident replies; `input_text` only
/// matters for simple replies, which switch to yes-variants when the
/// message contains a `?`.
pub fn build_pool(
    store: &TemplateStore,
    mode: Mode,
    context: Context,
    input_text: &str,
) -> Result<SuggestionPool, FriendError> {
    let pool = match mode {
        Mode::Warm | Mode::Confident => {
            SuggestionPool::single(reply_pool(store, mode, context)?, REPLY_SAMPLE_SIZE)
        }
        Mode::Simple => {
            let items = if input_text.contains('?') {
                auxiliary_list(store, mode, AuxiliaryKey::YesVariants)?
            } else {
                store.get_base(mode)?.to_vec()
            };
            SuggestionPool::single(items, SHORT_SAMPLE_SIZE)
        }
        Mode::Smalltalk => SuggestionPool::single(
            auxiliary_list(store, mode, AuxiliaryKey::Starters)?,
            SHORT_SAMPLE_SIZE,
        ),
        Mode::Calm => SuggestionPool {
            draws: vec![
                PoolDraw {
                    items: auxiliary_list(store, mode, AuxiliaryKey::Scripts)?,
                    count: CALM_SCRIPT_COUNT,
                },
                PoolDraw {
                    items: auxiliary_list(store, mode, AuxiliaryKey::QuickCalms)?,
                    count: QUICK_CALM_COUNT,
                },
            ],
        },
    };

    Ok(pool)
}

/// Base replies followed by the context-specific replies, if any
///
/// Items present in both lists are kept twice.
pub fn reply_pool(
    store: &TemplateStore,
    mode: Mode,
    context: Context,
) -> Result<Vec<String>, FriendError> {
    let mut pool = store.get_base(mode)?.to_vec();
    if let Some(extra) = store.get_contextual(mode, context)? {
        pool.extend_from_slice(extra);
    }
    Ok(pool)
}

fn auxiliary_list(
    store: &TemplateStore,
    mode: Mode,
    key: AuxiliaryKey,
) -> Result<Vec<String>, FriendError> {
    Ok(store
        .get_auxiliary(mode, key)?
        .map(<[String]>::to_vec)
        .unwrap_or_default())
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod pool_tests;
