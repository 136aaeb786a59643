// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product record abstraction used when saving option checkboxes.

/// A product being saved by the host editor.
///
/// Instead of probing for setter methods at runtime, a record advertises
/// which option keys it stores as native properties.
pub trait ProductRecord {
    /// Returns true if the record has a dedicated setter for `key`.
    fn has_native_setter(&self, key: &str) -> bool;

    /// Writes `value` through the native setter for `key`.
    fn set_property(&mut self, key: &str, value: &str);

    /// Stores `value` as free-form metadata under `meta_key`.
    fn update_meta(&mut self, meta_key: &str, value: &str);
}
