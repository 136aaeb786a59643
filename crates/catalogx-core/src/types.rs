// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the registry and the presentation adapter.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Product types the host editor ships with.
///
/// These never appear in the type selector additions, even when a
/// contributor redeclares them.
pub const DEFAULT_TYPES: [&str; 5] = ["simple", "grouped", "external", "variable", "variation"];

/// Product options (checkboxes) the host editor ships with.
pub const DEFAULT_OPTIONS: [&str; 2] = ["virtual", "downloadable"];

/// Prefix of the class that shows an element for a type or checked option.
pub const SHOW_IF: &str = "show_if_";

/// Prefix of the class that hides an element for a type or checked option.
pub const HIDE_IF: &str = "hide_if_";

/// Returns true if `slug` is one of the host's built-in product types.
pub fn is_default_type(slug: &str) -> bool {
    DEFAULT_TYPES.contains(&slug)
}

/// Returns true if `key` is one of the host's built-in product options.
pub fn is_default_option(key: &str) -> bool {
    DEFAULT_OPTIONS.contains(&key)
}

/// Direction of a visibility rule.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VisibilityAction {
    Show,
    Hide,
}

impl VisibilityAction {
    /// Class prefix for this action (`show_if_` / `hide_if_`).
    pub fn prefix(self) -> &'static str {
        match self {
            VisibilityAction::Show => SHOW_IF,
            VisibilityAction::Hide => HIDE_IF,
        }
    }

    /// Visibility class for `target` under this action, e.g. `show_if_bundle`.
    pub fn class_for(self, target: &str) -> String {
        format!("{}{target}", self.prefix())
    }
}

/// Shorthand for `show_if_<target>`.
pub fn show_if(target: &str) -> String {
    VisibilityAction::Show.class_for(target)
}

/// Shorthand for `hide_if_<target>`.
pub fn hide_if(target: &str) -> String {
    VisibilityAction::Hide.class_for(target)
}

/// Encode a boolean the way the host stores checkbox state.
pub fn bool_to_flag(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
