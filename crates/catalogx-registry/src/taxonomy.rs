// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory taxonomy store.

use std::collections::BTreeSet;
use std::sync::Mutex;

use catalogx_core::{CatalogError, DEFAULT_TYPES, TaxonomyStore};

/// A process-local set of product type terms.
///
/// Used by the CLI and tests in place of the host's persistent taxonomy.
#[derive(Debug, Default)]
pub struct InMemoryTaxonomy {
    terms: Mutex<BTreeSet<String>>,
}

impl InMemoryTaxonomy {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding the host's built-in type terms.
    pub fn with_default_types() -> Self {
        Self {
            terms: Mutex::new(DEFAULT_TYPES.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// All terms, sorted.
    pub fn terms(&self) -> Result<Vec<String>, CatalogError> {
        let terms = self.lock()?;
        Ok(terms.iter().cloned().collect())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeSet<String>>, CatalogError> {
        self.terms
            .lock()
            .map_err(|_| CatalogError::Internal("taxonomy lock poisoned".to_string()))
    }
}

impl TaxonomyStore for InMemoryTaxonomy {
    fn term_exists(&self, slug: &str) -> Result<bool, CatalogError> {
        Ok(self.lock()?.contains(slug))
    }

    fn insert_term(&self, slug: &str) -> Result<(), CatalogError> {
        self.lock()?.insert(slug.to_string());
        Ok(())
    }
}
