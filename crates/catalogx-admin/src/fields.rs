// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type selector and option checkbox additions.

use catalogx_registry::{DeclarationMap, OptionFieldSpec, Registry};

/// Host selector entries (`slug -> label`) plus the registry's custom types.
///
/// A registered slug already present on the host keeps its position but
/// takes the registry's label. Built-in types are never added.
pub fn merge_type_selector(
    mut host: DeclarationMap<String>,
    registry: &Registry,
) -> DeclarationMap<String> {
    host.extend(registry.type_selector_entries());
    host
}

/// Host option fields with every registered option written over its key.
pub fn merge_option_fields(
    mut host: DeclarationMap<OptionFieldSpec>,
    registry: &Registry,
) -> DeclarationMap<OptionFieldSpec> {
    for (key, spec) in registry.option_keys().into_iter().zip(registry.option_field_specs()) {
        host.insert(key, spec);
    }
    host
}
