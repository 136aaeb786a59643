// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration and resolution pipeline for custom product types and options.
//!
//! Independent contributors declare product types, per-type option
//! checkboxes and product data tabs. The pipeline runs once per process:
//!
//! 1. [`collector`] folds every contributor over the three declaration bags
//!    and makes sure each type slug has a taxonomy term.
//! 2. [`normalize`] fills defaults and coerces shorthand forms.
//! 3. [`extends`] turns `extends` relations into visibility classes.
//! 4. [`tabs`] merges owned and explicit tabs under last-write-wins keys.
//! 5. [`registry`] freezes the result and answers presentation queries.
//!
//! [`runtime::CustomizerRuntime`] memoizes the build; [`persist`] applies
//! the save policy for option checkboxes.

pub mod collector;
pub mod decl;
pub mod extends;
pub mod manifest;
pub mod model;
pub mod normalize;
pub mod persist;
pub mod registry;
pub mod runtime;
pub mod tabs;
pub mod taxonomy;

pub use collector::{Contributor, DeclarationCollector};
pub use decl::{
    DeclarationMap, Declarations, FlagValue, OptionBag, RawOption, RawTab, RawType, StringList,
    TabBag, TypeBag,
};
pub use manifest::{
    DeclarationManifest, ManifestContributor, load_manifest, load_manifest_dir,
    parse_declaration_manifest, register_manifests,
};
pub use model::{OptionFieldSpec, ProductOption, ProductType, Tab, TabSource, WiringRule};
pub use normalize::RegistrySettings;
pub use persist::{SaveReport, SubmittedForm, save_options};
pub use registry::Registry;
pub use runtime::CustomizerRuntime;
pub use taxonomy::InMemoryTaxonomy;
