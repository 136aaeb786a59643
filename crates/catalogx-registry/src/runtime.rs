// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Memoized registry lifecycle.
//!
//! The pipeline runs at most once per `CustomizerRuntime`. Initialization is
//! guarded by a mutex with a double-checked one-shot cell, so concurrent
//! first requests never collect declarations or create taxonomy terms twice.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use catalogx_core::{CatalogError, TaxonomyStore};
use tracing::info;

use crate::collector::DeclarationCollector;
use crate::normalize::RegistrySettings;
use crate::registry::Registry;

/// Owns the contributors and the once-built registry.
#[derive(Debug)]
pub struct CustomizerRuntime {
    collector: DeclarationCollector,
    settings: RegistrySettings,
    registry: OnceLock<Arc<Registry>>,
    init: Mutex<()>,
}

impl CustomizerRuntime {
    pub fn new(collector: DeclarationCollector, settings: RegistrySettings) -> Self {
        Self {
            collector,
            settings,
            registry: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// Build the registry on first call; later calls return the cached value.
    ///
    /// A failed build caches nothing, so the next call retries.
    pub fn build(&self, taxonomy: &dyn TaxonomyStore) -> Result<Arc<Registry>, CatalogError> {
        if let Some(registry) = self.registry.get() {
            return Ok(Arc::clone(registry));
        }

        // The lock guards no data; a contributor that panicked mid-build
        // left nothing behind, so a poisoned lock is safe to reuse.
        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(registry) = self.registry.get() {
            return Ok(Arc::clone(registry));
        }

        info!(
            contributors = self.collector.len(),
            "building product customizer registry"
        );
        let declarations = self.collector.collect(taxonomy)?;
        let registry = Arc::new(Registry::build(declarations, &self.settings));

        Ok(Arc::clone(self.registry.get_or_init(|| registry)))
    }

    /// The built registry, or `NotInitialized` if `build` has not succeeded yet.
    pub fn registry(&self) -> Result<Arc<Registry>, CatalogError> {
        self.registry
            .get()
            .map(Arc::clone)
            .ok_or(CatalogError::NotInitialized)
    }

    pub fn is_built(&self) -> bool {
        self.registry.get().is_some()
    }
}
