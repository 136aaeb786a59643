// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Saving option checkboxes onto a product record.
//!
//! Each option is written as `"yes"`/`"no"`: through the record's native
//! setter when the option is declared native or the record has a setter for
//! its key, otherwise as metadata under `_<key>`.

use std::collections::HashMap;

use catalogx_core::{ProductRecord, bool_to_flag};
use tracing::debug;

use crate::registry::Registry;

/// Value browsers submit for a ticked checkbox.
const CHECKED: &str = "on";

/// Fields submitted by the product edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedForm {
    fields: HashMap<String, String>,
}

impl SubmittedForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// True only when the field was submitted with the checkbox value.
    /// An absent field reads as unchecked.
    pub fn is_checked(&self, name: &str) -> bool {
        self.get(name) == Some(CHECKED)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SubmittedForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (k, v) in iter {
            form.insert(k, v);
        }
        form
    }
}

/// Where each option value ended up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Option keys written through native setters.
    pub native: Vec<String>,
    /// Metadata keys (`_<key>`) written as free-form meta.
    pub meta: Vec<String>,
}

/// Write every registered option from `form` onto `product`.
pub fn save_options(
    registry: &Registry,
    product: &mut dyn ProductRecord,
    form: &SubmittedForm,
) -> SaveReport {
    let mut report = SaveReport::default();

    for option in registry.options() {
        let field = option.field_id();
        let value = bool_to_flag(form.is_checked(&field));

        if option.native || product.has_native_setter(&option.key) {
            product.set_property(&option.key, value);
            debug!(option = %option.key, value, "saved option through native setter");
            report.native.push(option.key.clone());
        } else {
            product.update_meta(&field, value);
            debug!(meta_key = %field, value, "saved option as metadata");
            report.meta.push(field);
        }
    }

    report
}
