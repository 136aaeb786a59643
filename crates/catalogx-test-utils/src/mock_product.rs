// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock product record capturing writes for assertion in tests.

use std::collections::{BTreeMap, BTreeSet};

use catalogx_core::ProductRecord;

/// A product record with a configurable set of native setters.
#[derive(Debug, Clone, Default)]
pub struct MockProduct {
    setters: BTreeSet<String>,
    /// Values written through native setters, by option key.
    pub properties: BTreeMap<String, String>,
    /// Values written as metadata, by meta key.
    pub meta: BTreeMap<String, String>,
}

impl MockProduct {
    pub fn new() -> Self {
        Self::default()
    }

    /// A product exposing native setters for `keys`.
    pub fn with_setters<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            setters: keys.into_iter().map(String::from).collect(),
            ..Self::default()
        }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn meta_value(&self, meta_key: &str) -> Option<&str> {
        self.meta.get(meta_key).map(String::as_str)
    }
}

impl ProductRecord for MockProduct {
    fn has_native_setter(&self, key: &str) -> bool {
        self.setters.contains(key)
    }

    fn set_property(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    fn update_meta(&mut self, meta_key: &str, value: &str) {
        self.meta.insert(meta_key.to_string(), value.to_string());
    }
}
