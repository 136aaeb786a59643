// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture contributors.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalogx_registry::{Contributor, OptionBag, RawOption, RawTab, RawType, TabBag, TypeBag};

/// A contributor that inserts a fixed set of declarations.
#[derive(Debug, Clone, Default)]
pub struct StaticContributor {
    name: String,
    types: Vec<(String, RawType)>,
    options: Vec<(String, RawOption)>,
    tabs: Vec<(String, Vec<RawTab>)>,
}

impl StaticContributor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_type(mut self, slug: &str, raw: RawType) -> Self {
        self.types.push((slug.to_string(), raw));
        self
    }

    pub fn with_option(mut self, key: &str, raw: RawOption) -> Self {
        self.options.push((key.to_string(), raw));
        self
    }

    pub fn with_tabs(mut self, group: &str, tabs: Vec<RawTab>) -> Self {
        self.tabs.push((group.to_string(), tabs));
        self
    }
}

impl Contributor for StaticContributor {
    fn name(&self) -> &str {
        &self.name
    }

    fn contribute_types(&self, mut types: TypeBag) -> TypeBag {
        types.extend(self.types.iter().cloned());
        types
    }

    fn contribute_options(&self, mut options: OptionBag) -> OptionBag {
        options.extend(self.options.iter().cloned());
        options
    }

    fn contribute_tabs(&self, mut tabs: TabBag) -> TabBag {
        tabs.extend(self.tabs.iter().cloned());
        tabs
    }
}

/// Wraps a contributor and counts how often its type filter runs.
#[derive(Debug, Clone)]
pub struct CountingContributor<C> {
    inner: C,
    calls: Arc<AtomicUsize>,
}

impl<C: Contributor> CountingContributor<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter; stays valid after the contributor
    /// is moved into a collector.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<C: Contributor> Contributor for CountingContributor<C> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn contribute_types(&self, types: TypeBag) -> TypeBag {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(contributor = self.inner.name(), "counting contributor invoked");
        self.inner.contribute_types(types)
    }

    fn contribute_options(&self, options: OptionBag) -> OptionBag {
        self.inner.contribute_options(options)
    }

    fn contribute_tabs(&self, tabs: TabBag) -> TabBag {
        self.inner.contribute_tabs(tabs)
    }
}
