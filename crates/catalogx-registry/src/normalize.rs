// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema normalizer: fills defaults and coerces shorthand forms.
//!
//! Each bag is normalized independently. Nothing here fails: a declaration
//! missing its label or id still produces an entry so the presentation
//! layer can render an unlabeled but working control.

use catalogx_core::show_if;
use serde::{Deserialize, Serialize};

use crate::decl::{DeclarationMap, OptionBag, RawOption, RawTab, RawType, TypeBag};
use crate::model::{ProductOption, ProductType, Tab, TabSource};

/// Default panel group a tab is nested in.
pub const DEFAULT_PANEL: &str = "options_panel";

/// Default tab priority, sorting after the host's built-in tabs.
pub const DEFAULT_PRIORITY: i64 = 21;

/// Knobs applied while normalizing declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySettings {
    /// Panel used when a tab declares none.
    pub default_panel: String,
    /// Priority used when a tab declares none.
    pub default_priority: i64,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            default_panel: DEFAULT_PANEL.to_string(),
            default_priority: DEFAULT_PRIORITY,
        }
    }
}

/// A normalized declaration still carrying its raw inline tabs.
///
/// Inline tabs are resolved later by the tab aggregator, once the owner's
/// visibility set is final.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoped<T> {
    pub decl: T,
    pub tabs: Vec<RawTab>,
}

/// Append `value` unless it is already present.
pub(crate) fn push_unique(set: &mut Vec<String>, value: String) {
    if !set.contains(&value) {
        set.push(value);
    }
}

/// Map target slugs to their `show_if_` classes, deduplicated in order.
pub fn visibility_classes<'a>(targets: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut out = Vec::new();
    for target in targets {
        push_unique(&mut out, show_if(target));
    }
    out
}

/// Normalize one type declaration.
pub fn normalize_type(slug: &str, raw: RawType) -> Scoped<ProductType> {
    let name = raw
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| slug.to_string());

    Scoped {
        decl: ProductType {
            slug: slug.to_string(),
            name,
            implementation: raw.implementation.filter(|c| !c.trim().is_empty()),
            extends: raw.extends.items(),
            visibility: Vec::new(),
            show_groups: raw.show_groups.items(),
            show_tabs: raw.show_tabs.items(),
            tabs: raw.tabs.iter().map(RawTab::registry_key).collect(),
        },
        tabs: raw.tabs,
    }
}

/// Normalize the whole type bag.
pub fn normalize_types(bag: TypeBag) -> DeclarationMap<Scoped<ProductType>> {
    bag.map_values(normalize_type)
}

/// Normalize one option declaration. `for` targets become `show_if_` classes.
pub fn normalize_option(key: &str, raw: RawOption) -> Scoped<ProductOption> {
    let targets = raw.targets.items();

    Scoped {
        decl: ProductOption {
            key: key.to_string(),
            label: raw.label,
            description: raw.description,
            default: raw.default.as_bool(),
            native: raw.native.as_bool(),
            visibility: visibility_classes(targets.iter().map(String::as_str)),
            extends: raw.extends.items(),
            show_groups: raw.show_groups.items(),
            show_tabs: raw.show_tabs.items(),
            tabs: raw.tabs.iter().map(RawTab::registry_key).collect(),
        },
        tabs: raw.tabs,
    }
}

/// Normalize the whole option bag.
pub fn normalize_options(bag: OptionBag) -> DeclarationMap<Scoped<ProductOption>> {
    bag.map_values(normalize_option)
}

/// Normalize one tab declared under `owner`.
///
/// `inherited` is the owner's resolved visibility set; it is unioned with
/// the owner's own `show_if_` class and the tab's declared targets.
pub fn normalize_tab(
    raw: &RawTab,
    owner: &str,
    inherited: &[String],
    source: TabSource,
    settings: &RegistrySettings,
) -> Tab {
    let id = raw.id.clone().unwrap_or_default();

    let mut visibility = visibility_classes(raw.targets.items().iter().map(String::as_str));
    if !owner.trim().is_empty() {
        push_unique(&mut visibility, show_if(owner));
    }
    for class in inherited {
        push_unique(&mut visibility, class.clone());
    }

    let mut panels = raw.panel.items();
    if panels.is_empty() {
        panels.push(settings.default_panel.clone());
    }

    Tab {
        key: raw.registry_key(),
        target: format!("{id}_product_data"),
        id,
        label: raw.label.clone(),
        icon: raw.icon.clone().filter(|i| !i.trim().is_empty()),
        priority: raw.priority.unwrap_or(settings.default_priority),
        panels,
        visibility,
        owner: owner.to_string(),
        source,
    }
}
