// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declaration collector.
//!
//! Contributors are registered up front and applied in registration order.
//! Each one receives the bag accumulated so far and returns it, possibly
//! with keys added, overwritten or removed. Nothing about contributor
//! ordering is promised beyond "the last writer observed wins".

use catalogx_core::{CatalogError, TaxonomyStore};
use tracing::{debug, warn};

use crate::decl::{DeclarationMap, Declarations, OptionBag, TabBag, TypeBag};

/// A source of type, option and tab declarations.
///
/// All three methods default to returning the bag untouched, so a
/// contributor only overrides what it declares.
pub trait Contributor: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    fn contribute_types(&self, types: TypeBag) -> TypeBag {
        types
    }

    fn contribute_options(&self, options: OptionBag) -> OptionBag {
        options
    }

    fn contribute_tabs(&self, tabs: TabBag) -> TabBag {
        tabs
    }
}

/// Ordered list of contributors folded into the three declaration bags.
#[derive(Default)]
pub struct DeclarationCollector {
    contributors: Vec<Box<dyn Contributor>>,
}

impl std::fmt::Debug for DeclarationCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeclarationCollector")
            .field("contributors", &self.names())
            .finish()
    }
}

impl DeclarationCollector {
    /// Create a collector with no contributors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contributor; it runs after every contributor registered before it.
    pub fn register(&mut self, contributor: Box<dyn Contributor>) {
        debug!(contributor = contributor.name(), "declaration contributor registered");
        self.contributors.push(contributor);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, contributor: impl Contributor + 'static) -> Self {
        self.register(Box::new(contributor));
        self
    }

    /// Contributor names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.contributors.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    /// Fold all contributors over the type bag and make sure every slug has
    /// a taxonomy term.
    ///
    /// Slugs are trimmed; declarations left with an empty slug are
    /// dropped. A taxonomy failure is
    /// fatal and propagates.
    pub fn collect_types(&self, taxonomy: &dyn TaxonomyStore) -> Result<TypeBag, CatalogError> {
        let types = self
            .contributors
            .iter()
            .fold(TypeBag::new(), |acc, c| c.contribute_types(acc));

        let types = trim_keys(types, || {
            warn!("dropping product type declaration with an empty slug");
        });

        for slug in types.keys() {
            if taxonomy.ensure_term(slug)? {
                debug!(slug, "created product type term");
            }
        }

        Ok(types)
    }

    /// Fold all contributors over the option bag, trimming keys and
    /// dropping empty ones.
    pub fn collect_options(&self) -> OptionBag {
        let options = self
            .contributors
            .iter()
            .fold(OptionBag::new(), |acc, c| c.contribute_options(acc));

        trim_keys(options, || {
            warn!("dropping product option declaration with an empty key");
        })
    }

    /// Fold all contributors over the explicit tab bag.
    pub fn collect_tabs(&self) -> TabBag {
        let tabs = self
            .contributors
            .iter()
            .fold(TabBag::new(), |acc, c| c.contribute_tabs(acc));

        tabs.into_iter()
            .map(|(group, list)| (group.trim().to_string(), list))
            .collect()
    }

    /// Collect all three bags: types, then options, then tabs.
    pub fn collect(&self, taxonomy: &dyn TaxonomyStore) -> Result<Declarations, CatalogError> {
        Ok(Declarations {
            types: self.collect_types(taxonomy)?,
            options: self.collect_options(),
            tabs: self.collect_tabs(),
        })
    }
}

/// Re-key `bag` under trimmed keys, calling `on_empty` for each key that
/// trims to nothing. Padded duplicates of a key collapse into one entry,
/// last write wins.
fn trim_keys<T>(bag: DeclarationMap<T>, on_empty: impl Fn()) -> DeclarationMap<T> {
    let mut out = DeclarationMap::new();
    for (key, value) in bag {
        let trimmed = key.trim();
        if trimmed.is_empty() {
            on_empty();
            continue;
        }
        if trimmed.len() != key.len() {
            debug!(key = %key, "trimmed padded declaration key");
        }
        out.insert(trimmed, value);
    }
    out
}
