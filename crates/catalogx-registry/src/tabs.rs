// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tab aggregator.
//!
//! Merges tabs attached to types, tabs attached to options and explicitly
//! declared tabs into one keyed map. Sources are applied in that order, so
//! an explicit tab overrides a type- or option-scoped tab with the same
//! key. A later entry replaces an earlier one wholesale; visibility classes
//! are never merged across entries.

use tracing::debug;

use crate::decl::{DeclarationMap, TabBag};
use crate::model::{ProductOption, ProductType, Tab, TabSource};
use crate::normalize::{RegistrySettings, Scoped, normalize_tab};

/// Write `tab` under its key, replacing any earlier entry.
fn put(out: &mut DeclarationMap<Tab>, tab: Tab) {
    let key = tab.key.clone();
    if let Some(previous) = out.insert(key.clone(), tab) {
        debug!(
            key = %key,
            replaced_owner = %previous.owner,
            replaced_source = %previous.source,
            "tab key redeclared, later declaration wins"
        );
    }
}

/// Aggregate all tab sources into the resolved tab map.
pub fn aggregate(
    types: &DeclarationMap<Scoped<ProductType>>,
    options: &DeclarationMap<Scoped<ProductOption>>,
    explicit: &TabBag,
    settings: &RegistrySettings,
) -> DeclarationMap<Tab> {
    let mut out = DeclarationMap::new();

    for (slug, scoped) in types.iter() {
        for raw in &scoped.tabs {
            let tab = normalize_tab(raw, slug, &scoped.decl.visibility, TabSource::Type, settings);
            put(&mut out, tab);
        }
    }

    for (key, scoped) in options.iter() {
        for raw in &scoped.tabs {
            let tab = normalize_tab(raw, key, &scoped.decl.visibility, TabSource::Option, settings);
            put(&mut out, tab);
        }
    }

    for (group, tabs) in explicit.iter() {
        for raw in tabs {
            put(&mut out, normalize_tab(raw, group, &[], TabSource::Explicit, settings));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{RawOption, RawTab, RawType, StringList};
    use crate::extends::{resolve_options, resolve_types};
    use crate::normalize::{normalize_options, normalize_types};
    use tracing_test::traced_test;

    fn tab(id: &str, label: &str) -> RawTab {
        RawTab {
            id: Some(id.into()),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    fn scoped_types(
        entries: Vec<(&str, RawType)>,
    ) -> DeclarationMap<Scoped<ProductType>> {
        let mut types = normalize_types(entries.into_iter().collect());
        resolve_types(&mut types);
        types
    }

    #[test]
    fn owned_tabs_inherit_owner_visibility() {
        let types = scoped_types(vec![(
            "bundle",
            RawType {
                extends: StringList::from("simple"),
                tabs: vec![tab("bundle_items", "Items")],
                ..Default::default()
            },
        )]);

        let mut options = normalize_options(
            [(
                "gift_wrap",
                RawOption {
                    targets: StringList::from("simple"),
                    tabs: vec![tab("wrapping", "Wrapping")],
                    ..Default::default()
                },
            )]
            .into_iter()
            .collect(),
        );
        resolve_options(&mut options);

        let tabs = aggregate(&types, &options, &TabBag::new(), &RegistrySettings::default());

        let items = tabs.get("bundle_items").unwrap();
        assert_eq!(items.visibility, vec!["show_if_bundle", "show_if_simple"]);
        assert_eq!(items.source, TabSource::Type);

        let wrapping = tabs.get("wrapping").unwrap();
        assert_eq!(wrapping.visibility, vec!["show_if_gift_wrap", "show_if_simple"]);
        assert_eq!(wrapping.owner, "gift_wrap");
    }

    #[test]
    fn explicit_tab_replaces_owned_tab_wholesale() {
        let types = scoped_types(vec![(
            "bundle",
            RawType {
                tabs: vec![RawTab {
                    icon: Some("woo:e01a".into()),
                    ..tab("shared", "From type")
                }],
                ..Default::default()
            },
        )]);

        let mut explicit = TabBag::new();
        explicit.insert("extras", vec![tab("shared", "Explicit")]);

        let tabs = aggregate(&types, &DeclarationMap::new(), &explicit, &RegistrySettings::default());
        let shared = tabs.get("shared").unwrap();
        assert_eq!(shared.label.as_deref(), Some("Explicit"));
        assert!(shared.icon.is_none());
        assert_eq!(shared.visibility, vec!["show_if_extras"]);
        assert_eq!(shared.source, TabSource::Explicit);
        assert_eq!(tabs.len(), 1);
    }

    #[test]
    #[traced_test]
    fn overwrite_logs_the_replaced_source() {
        let types = scoped_types(vec![(
            "bundle",
            RawType {
                tabs: vec![tab("shared", "From type")],
                ..Default::default()
            },
        )]);
        let mut explicit = TabBag::new();
        explicit.insert("extras", vec![tab("shared", "Explicit")]);

        aggregate(&types, &DeclarationMap::new(), &explicit, &RegistrySettings::default());
        assert!(logs_contain("tab key redeclared"));
        assert!(logs_contain("replaced_source=type"));
    }

    #[test]
    fn alias_key_overrides_id() {
        let mut explicit = TabBag::new();
        explicit.insert(
            "bundle",
            vec![
                RawTab {
                    key: Some("inventory".into()),
                    ..tab("bundle_inventory", "Stock")
                },
                tab("inventory", "Replaced"),
            ],
        );
        let tabs = aggregate(
            &DeclarationMap::new(),
            &DeclarationMap::new(),
            &explicit,
            &RegistrySettings::default(),
        );
        assert_eq!(tabs.len(), 1);
        let inv = tabs.get("inventory").unwrap();
        assert_eq!(inv.id, "inventory");
        assert_eq!(inv.label.as_deref(), Some("Replaced"));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let types = scoped_types(vec![(
            "bundle",
            RawType {
                tabs: vec![tab("a", "A"), tab("b", "B")],
                ..Default::default()
            },
        )]);
        let mut explicit = TabBag::new();
        explicit.insert("bundle", vec![tab("b", "B2")]);

        let settings = RegistrySettings::default();
        let first = aggregate(&types, &DeclarationMap::new(), &explicit, &settings);
        let second = aggregate(&types, &DeclarationMap::new(), &explicit, &settings);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
