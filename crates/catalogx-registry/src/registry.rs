// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resolved registry.
//!
//! `Registry` is the immutable result of one pipeline run: canonical types,
//! options and tabs, cross-referenced by key, plus the derived map of
//! implementation overrides. All accessors are pure reads.

use catalogx_core::{VisibilityAction, bool_to_flag, hide_if, is_default_type, show_if};
use serde::Serialize;
use tracing::info;

use crate::decl::{DeclarationMap, Declarations};
use crate::extends;
use crate::model::{OptionFieldSpec, ProductOption, ProductType, Tab, WiringRule};
use crate::normalize::{self, RegistrySettings};
use crate::tabs;

/// Resolved product types, options and tabs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registry {
    types: DeclarationMap<ProductType>,
    options: DeclarationMap<ProductOption>,
    tabs: DeclarationMap<Tab>,
    implementations: DeclarationMap<String>,
}

impl Registry {
    /// Run normalize → extends → tab aggregation over collected declarations.
    ///
    /// Pure: the same declarations and settings always yield an equal registry.
    pub fn build(declarations: Declarations, settings: &RegistrySettings) -> Self {
        let Declarations {
            types,
            options,
            tabs: explicit_tabs,
        } = declarations;

        let mut types = normalize::normalize_types(types);
        let mut options = normalize::normalize_options(options);

        extends::resolve_types(&mut types);
        extends::resolve_options(&mut options);

        let tabs = tabs::aggregate(&types, &options, &explicit_tabs, settings);

        let types = types.map_values(|_, scoped| scoped.decl);
        let options = options.map_values(|_, scoped| scoped.decl);

        let implementations = types
            .iter()
            .filter_map(|(slug, t)| t.implementation.clone().map(|imp| (slug.to_string(), imp)))
            .collect();

        info!(
            types = types.len(),
            options = options.len(),
            tabs = tabs.len(),
            "product customizer registry resolved"
        );

        Self {
            types,
            options,
            tabs,
            implementations,
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &ProductType> {
        self.types.values()
    }

    pub fn options(&self) -> impl Iterator<Item = &ProductOption> {
        self.options.values()
    }

    /// Tabs in registration order.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.tabs.values()
    }

    pub fn product_type(&self, slug: &str) -> Option<&ProductType> {
        self.types.get(slug)
    }

    pub fn option(&self, key: &str) -> Option<&ProductOption> {
        self.options.get(key)
    }

    pub fn tab(&self, key: &str) -> Option<&Tab> {
        self.tabs.get(key)
    }

    /// Keys of every registered option, in registration order.
    pub fn option_keys(&self) -> Vec<String> {
        self.options.keys().map(String::from).collect()
    }

    /// Registered type slugs minus the host's built-in types.
    pub fn list_type_slugs_excluding_defaults(&self) -> Vec<String> {
        self.types
            .keys()
            .filter(|slug| !is_default_type(slug))
            .map(String::from)
            .collect()
    }

    /// `(slug, name)` pairs for the type selector, built-ins excluded.
    pub fn type_selector_entries(&self) -> Vec<(String, String)> {
        self.types
            .values()
            .filter(|t| !is_default_type(&t.slug))
            .map(|t| (t.slug.clone(), t.name.clone()))
            .collect()
    }

    /// Checkbox field specs for every option, in registration order.
    pub fn option_field_specs(&self) -> Vec<OptionFieldSpec> {
        self.options
            .values()
            .map(|opt| OptionFieldSpec {
                id: opt.field_id(),
                label: opt.label.clone(),
                description: opt.description.clone(),
                default: bool_to_flag(opt.default).to_string(),
                wrapper_class: opt.visibility.join(" "),
            })
            .collect()
    }

    /// Tabs sorted by priority; equal priorities keep registration order.
    pub fn tabs_in_priority_order(&self) -> Vec<&Tab> {
        let mut tabs: Vec<&Tab> = self.tabs.values().collect();
        tabs.sort_by_key(|t| t.priority);
        tabs
    }

    /// Overriding implementation reference for a type slug.
    pub fn implementation_for(&self, slug: &str) -> Option<&str> {
        self.implementations.get(slug).map(String::as_str)
    }

    /// The implementation to construct for `slug`, falling back to the host's choice.
    pub fn resolve_implementation<'a>(&'a self, host_default: &'a str, slug: &str) -> &'a str {
        self.implementation_for(slug).unwrap_or(host_default)
    }

    /// Derived `slug -> implementation` override map.
    pub fn implementation_overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.implementations.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Show/hide rules for the client-side visibility script.
    ///
    /// Options are visited before types. Per entry, `show_groups` and
    /// `show_tabs` each yield one show rule per target, while every
    /// `extends` target yields a show rule on its `show_if_` family and a
    /// paired hide rule on its `hide_if_` family.
    pub fn visibility_wiring_plan(&self) -> Vec<WiringRule> {
        let mut plan = Vec::new();

        let entries = self
            .options
            .values()
            .map(|o| (&o.key, &o.show_groups, &o.show_tabs, &o.extends))
            .chain(
                self.types
                    .values()
                    .map(|t| (&t.slug, &t.show_groups, &t.show_tabs, &t.extends)),
            );

        for (key, groups, shown_tabs, extends) in entries {
            let rule = |action, selector: String| WiringRule {
                action,
                selector,
                key: key.clone(),
            };

            plan.extend(
                groups
                    .iter()
                    .map(|g| rule(VisibilityAction::Show, format!(".options_group.{g}"))),
            );
            plan.extend(
                shown_tabs
                    .iter()
                    .map(|t| rule(VisibilityAction::Show, format!(".{t}_options"))),
            );
            plan.extend(
                extends
                    .iter()
                    .map(|t| rule(VisibilityAction::Show, format!(".{}", show_if(t)))),
            );
            plan.extend(
                extends
                    .iter()
                    .map(|t| rule(VisibilityAction::Hide, format!(".{}", hide_if(t)))),
            );
        }

        plan
    }
}
