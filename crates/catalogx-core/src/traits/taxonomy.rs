// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Taxonomy storage for product type terms.

use crate::error::CatalogError;

/// Host storage holding one persisted term per product type slug.
///
/// Terms are created once and never removed by the customizer.
pub trait TaxonomyStore: Send + Sync {
    /// Returns true if a term with this slug already exists.
    fn term_exists(&self, slug: &str) -> Result<bool, CatalogError>;

    /// Creates the term for `slug`.
    fn insert_term(&self, slug: &str) -> Result<(), CatalogError>;

    /// Creates the term for `slug` unless it already exists.
    ///
    /// Returns true when a term was created. Re-observing an existing slug
    /// is a no-op.
    fn ensure_term(&self, slug: &str) -> Result<bool, CatalogError> {
        if self.term_exists(slug)? {
            return Ok(false);
        }
        self.insert_term(slug)?;
        Ok(true)
    }
}
