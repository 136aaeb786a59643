// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extends resolver.
//!
//! A declaration that extends `t` behaves as if it were also declared for
//! `t`: the class `show_if_<t>` joins its visibility set. Expansion is a
//! single hop; chains of `extends` are not followed.

use catalogx_core::show_if;

use crate::decl::DeclarationMap;
use crate::model::{ProductOption, ProductType};
use crate::normalize::{Scoped, push_unique};

/// Add `show_if_<t>` to `visibility` for each `t` in `extends`.
pub fn expand(visibility: &mut Vec<String>, extends: &[String]) {
    for target in extends {
        push_unique(visibility, show_if(target));
    }
}

/// Resolve `extends` for every type.
pub fn resolve_types(types: &mut DeclarationMap<Scoped<ProductType>>) {
    for (_, scoped) in types.iter_mut() {
        let decl = &mut scoped.decl;
        expand(&mut decl.visibility, &decl.extends);
    }
}

/// Resolve `extends` for every option, merging into its `for` set.
pub fn resolve_options(options: &mut DeclarationMap<Scoped<ProductOption>>) {
    for (_, scoped) in options.iter_mut() {
        let decl = &mut scoped.decl;
        expand(&mut decl.visibility, &decl.extends);
    }
}
