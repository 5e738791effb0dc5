//! Suggestion generation entry point
//!
//! Classifies the message (for modes that use context), builds the pool
//! and samples it. Holds no state between calls, so regenerating with the
//! same input usually gives a different selection.

use rand::Rng;

use crate::context::{Context, classify};
use crate::error::FriendError;
use crate::mode::Mode;
use crate::pool::build_pool;
use crate::sampler::sample;
use crate::templates::TemplateStore;

/// Produces suggestions from a populated [`TemplateStore`]
#[derive(Debug, Clone, Copy)]
pub struct SuggestionGenerator<'a> {
    store: &'a TemplateStore,
}

impl<'a> SuggestionGenerator<'a> {
    pub fn new(store: &'a TemplateStore) -> Self {
        Self { store }
    }

    /// Generator backed by the process-wide template store
    pub fn global() -> SuggestionGenerator<'static> {
        SuggestionGenerator::new(TemplateStore::global())
    }

    /// Generate suggestions using the thread-local random source
    pub fn generate(&self, mode: Mode, input_text: &str) -> Result<Vec<String>, FriendError> {
        self.generate_with_rng(mode, input_text, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        mode: Mode,
        input_text: &str,
        rng: &mut R,
    ) -> Result<Vec<String>, FriendError> {
        let context = if mode.uses_context() {
            classify(input_text)
        } else {
            Context::None
        };

        let pool = build_pool(self.store, mode, context, input_text)?;
        log::debug!(
            "Generating up to {} {} suggestions (context: {}, {} candidates)",
            mode.sample_size(),
            mode,
            context,
            pool.len()
        );

        let suggestions = pool
            .draws
            .iter()
            .flat_map(|draw| sample(&draw.items, draw.count, &mut *rng))
            .collect();

        Ok(suggestions)
    }
}

/// Generate suggestions from the process-wide template store
pub fn generate(mode: Mode, input_text: &str) -> Result<Vec<String>, FriendError> {
    SuggestionGenerator::global().generate(mode, input_text)
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod generator_tests;
