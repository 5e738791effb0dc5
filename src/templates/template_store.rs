//! Process-wide template storage
//!
//! The store starts empty, is populated exactly once (from a template
//! directory, the templates shipped with the binary, or the built-in
//! bundle) and stays immutable afterwards. Reads before
//! population fail with [`FriendError::StoreNotLoaded`].

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::fallback::builtin_bundle;
use super::template_set::{AuxiliaryKey, TemplateBundle, TemplateSet};
use super::template_storage::{load_bundle_from_dir, shipped_bundle};
use crate::context::Context;
use crate::error::FriendError;
use crate::mode::Mode;

/// Where the installed templates came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Loaded from the template files in this directory
    Files(PathBuf),
    /// Template files compiled into the binary
    Shipped,
    /// Built-in bundle
    Builtin,
}

#[derive(Debug)]
struct LoadedTemplates {
    bundle: TemplateBundle,
    source: TemplateSource,
}

/// Write-once holder of the template bundle
#[derive(Debug, Default)]
pub struct TemplateStore {
    loaded: OnceLock<LoadedTemplates>,
}

static GLOBAL_STORE: TemplateStore = TemplateStore::new();

impl TemplateStore {
    pub const fn new() -> Self {
        Self {
            loaded: OnceLock::new(),
        }
    }

    /// Store that is already populated with `bundle`
    pub fn with_bundle(bundle: TemplateBundle, source: TemplateSource) -> Self {
        let store = Self::new();
        store.install(bundle, source);
        store
    }

    /// The store shared by the whole process
    pub fn global() -> &'static TemplateStore {
        &GLOBAL_STORE
    }

    /// Populate the store
    ///
    /// Returns `false` and leaves the existing bundle in place if the store
    /// was already populated.
    pub fn install(&self, bundle: TemplateBundle, source: TemplateSource) -> bool {
        self.loaded.set(LoadedTemplates { bundle, source }).is_ok()
    }

    /// Load templates from `dir`, or the shipped templates when no directory
    /// is given
    ///
    /// Never fails: a load error is logged and the built-in bundle is
    /// installed instead. Returns the source of the bundle now in the store.
    pub async fn load(&self, dir: Option<&Path>) -> &TemplateSource {
        if let Some(loaded) = self.loaded.get() {
            log::debug!("Templates already loaded from {:?}", loaded.source);
            return &loaded.source;
        }

        let (bundle, source) = match dir {
            Some(dir) => match load_bundle_from_dir(dir).await {
                Ok(bundle) => {
                    log::debug!("Loaded templates from {}", dir.display());
                    (bundle, TemplateSource::Files(dir.to_path_buf()))
                }
                Err(e) => {
                    log::warn!("{}; using built-in templates", e);
                    (builtin_bundle(), TemplateSource::Builtin)
                }
            },
            None => match shipped_bundle() {
                Ok(bundle) => {
                    log::debug!("No template directory configured; using shipped templates");
                    (bundle, TemplateSource::Shipped)
                }
                Err(e) => {
                    log::warn!("{}; using built-in templates", e);
                    (builtin_bundle(), TemplateSource::Builtin)
                }
            },
        };

        // Another caller may have populated the store while we were loading
        &self
            .loaded
            .get_or_init(|| LoadedTemplates { bundle, source })
            .source
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.get().is_some()
    }

    pub fn source(&self) -> Option<&TemplateSource> {
        self.loaded.get().map(|loaded| &loaded.source)
    }

    pub fn template_set(&self, mode: Mode) -> Result<&TemplateSet, FriendError> {
        self.loaded
            .get()
            .map(|loaded| loaded.bundle.get(mode))
            .ok_or(FriendError::StoreNotLoaded)
    }

    pub fn get_base(&self, mode: Mode) -> Result<&[String], FriendError> {
        Ok(self.template_set(mode)?.base())
    }

    pub fn get_contextual(
        &self,
        mode: Mode,
        context: Context,
    ) -> Result<Option<&[String]>, FriendError> {
        Ok(self.template_set(mode)?.contextual(context))
    }

    pub fn get_auxiliary(
        &self,
        mode: Mode,
        key: AuxiliaryKey,
    ) -> Result<Option<&[String]>, FriendError> {
        Ok(self.template_set(mode)?.auxiliary(key))
    }
}

#[cfg(test)]
#[path = "template_store_tests.rs"]
mod template_store_tests;
