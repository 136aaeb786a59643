// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock taxonomy store for deterministic testing.

use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalogx_core::{CatalogError, TaxonomyStore};

/// A taxonomy store that records every insert and can be told to fail.
#[derive(Debug, Default)]
pub struct MockTaxonomy {
    terms: Mutex<BTreeSet<String>>,
    inserted: Mutex<Vec<String>>,
    lookups: AtomicUsize,
    fail_on: Option<String>,
}

impl MockTaxonomy {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `terms`.
    pub fn with_terms<'a>(terms: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            terms: Mutex::new(terms.into_iter().map(String::from).collect()),
            ..Self::default()
        }
    }

    /// Make `insert_term` fail for `slug`, as a broken host database would.
    pub fn failing_on(mut self, slug: &str) -> Self {
        self.fail_on = Some(slug.to_string());
        self
    }

    /// Slugs passed to `insert_term`, in call order.
    pub fn inserted(&self) -> Vec<String> {
        self.inserted
            .lock()
            .map(|slugs| slugs.clone())
            .unwrap_or_default()
    }

    /// Number of `term_exists` calls.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TaxonomyStore for MockTaxonomy {
    fn term_exists(&self, slug: &str) -> Result<bool, CatalogError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.terms.lock().map_err(poisoned)?.contains(slug))
    }

    fn insert_term(&self, slug: &str) -> Result<(), CatalogError> {
        if self.fail_on.as_deref() == Some(slug) {
            return Err(CatalogError::taxonomy(
                slug,
                std::io::Error::other("term table is read-only"),
            ));
        }
        self.terms.lock().map_err(poisoned)?.insert(slug.to_string());
        self.inserted.lock().map_err(poisoned)?.push(slug.to_string());
        Ok(())
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> CatalogError {
    CatalogError::Internal("mock taxonomy lock poisoned".to_string())
}
