// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Resolved (canonical) entities held by the registry.

use catalogx_core::VisibilityAction;
use serde::Serialize;
use strum::Display;

/// A resolved product type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductType {
    pub slug: String,
    /// Display label; equals the slug when none was declared.
    pub name: String,
    /// Overriding behavior implementation, if any.
    pub implementation: Option<String>,
    pub extends: Vec<String>,
    /// `show_if_<target>` for every `extends` target.
    pub visibility: Vec<String>,
    pub show_groups: Vec<String>,
    pub show_tabs: Vec<String>,
    /// Registry keys of the tabs this type declared.
    pub tabs: Vec<String>,
}

/// A resolved product option (checkbox).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductOption {
    pub key: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub default: bool,
    /// Saved through the product's native setter.
    pub native: bool,
    /// Visibility classes (`show_if_<target>`), extends targets included.
    #[serde(rename = "for")]
    pub visibility: Vec<String>,
    pub extends: Vec<String>,
    pub show_groups: Vec<String>,
    pub show_tabs: Vec<String>,
    pub tabs: Vec<String>,
}

impl ProductOption {
    /// Form field / metadata key for this option, e.g. `_gift_wrap`.
    pub fn field_id(&self) -> String {
        format!("_{}", self.key)
    }
}

/// Where a tab declaration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TabSource {
    Type,
    Option,
    Explicit,
}

/// A resolved product data tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub key: String,
    pub id: String,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub priority: i64,
    /// Panel groups the tab's content is nested in.
    pub panels: Vec<String>,
    /// Classes controlling when the tab is shown.
    pub visibility: Vec<String>,
    /// DOM id of the tab's panel: `<id>_product_data`.
    pub target: String,
    /// Slug or group key the tab was declared under.
    pub owner: String,
    pub source: TabSource,
}

/// One show/hide instruction for the client-side visibility script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiringRule {
    pub action: VisibilityAction,
    /// CSS selector of the elements receiving the class.
    pub selector: String,
    /// Type slug or option key that triggers the rule.
    pub key: String,
}

impl WiringRule {
    /// Class added to the selected elements, e.g. `hide_if_bundle_qty`.
    pub fn class_name(&self) -> String {
        self.action.class_for(&self.key)
    }
}

/// Checkbox field spec handed to the host's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionFieldSpec {
    pub id: String,
    pub label: Option<String>,
    pub description: Option<String>,
    /// `"yes"` or `"no"`.
    pub default: String,
    /// Space-separated visibility classes for the field wrapper.
    pub wrapper_class: String,
}
