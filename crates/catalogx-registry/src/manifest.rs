// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declaration manifests: contributors described in TOML.
//!
//! ```toml
//! [types.bundle]
//! name = "Bundle"
//! extends = "simple"
//!
//! [[types.bundle.tabs]]
//! id = "bundle_items"
//! label = "Bundled items"
//! icon = "woo:e006"
//!
//! [options.gift_wrap]
//! label = "Gift wrap"
//! for = "simple, variable"
//! default = "no"
//!
//! [tabs]
//! extras = [{ id = "care", label = "Care instructions", prio = 60 }]
//!
//! [remove]
//! options = ["downloadable"]
//! ```
//!
//! Applying a manifest first removes the keys listed under `[remove]` from
//! the accumulated bags, then inserts or overwrites its own declarations.

use std::path::Path;

use catalogx_core::CatalogError;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::collector::{Contributor, DeclarationCollector};
use crate::decl::{OptionBag, TabBag, TypeBag};

/// Keys a manifest removes from what earlier contributors declared.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Removals {
    pub types: Vec<String>,
    pub options: Vec<String>,
    pub tabs: Vec<String>,
}

/// Parsed contents of a declaration manifest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeclarationManifest {
    pub types: TypeBag,
    pub options: OptionBag,
    pub tabs: TabBag,
    pub remove: Removals,
}

/// A contributor backed by a parsed manifest.
#[derive(Debug, Clone)]
pub struct ManifestContributor {
    name: String,
    manifest: DeclarationManifest,
}

impl ManifestContributor {
    pub fn new(name: impl Into<String>, manifest: DeclarationManifest) -> Self {
        Self {
            name: name.into(),
            manifest,
        }
    }

    pub fn manifest(&self) -> &DeclarationManifest {
        &self.manifest
    }
}

impl Contributor for ManifestContributor {
    fn name(&self) -> &str {
        &self.name
    }

    fn contribute_types(&self, mut types: TypeBag) -> TypeBag {
        for slug in &self.manifest.remove.types {
            types.remove(slug);
        }
        types.extend(
            self.manifest
                .types
                .iter()
                .map(|(slug, raw)| (slug, raw.clone())),
        );
        types
    }

    fn contribute_options(&self, mut options: OptionBag) -> OptionBag {
        for key in &self.manifest.remove.options {
            options.remove(key);
        }
        options.extend(
            self.manifest
                .options
                .iter()
                .map(|(key, raw)| (key, raw.clone())),
        );
        options
    }

    fn contribute_tabs(&self, mut tabs: TabBag) -> TabBag {
        for group in &self.manifest.remove.tabs {
            tabs.remove(group);
        }
        tabs.extend(
            self.manifest
                .tabs
                .iter()
                .map(|(group, list)| (group, list.clone())),
        );
        tabs
    }
}

/// Parse a manifest from TOML content; `name` identifies it in errors and logs.
pub fn parse_declaration_manifest(
    name: &str,
    toml_content: &str,
) -> Result<ManifestContributor, CatalogError> {
    let manifest: DeclarationManifest =
        toml::from_str(toml_content).map_err(|e| CatalogError::Manifest {
            path: name.to_string(),
            message: e.to_string(),
        })?;

    debug!(
        manifest = name,
        types = manifest.types.len(),
        options = manifest.options.len(),
        tab_groups = manifest.tabs.len(),
        "parsed declaration manifest"
    );

    Ok(ManifestContributor::new(name, manifest))
}

/// Read and parse one manifest file.
pub fn load_manifest(path: &Path) -> Result<ManifestContributor, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_declaration_manifest(&path.display().to_string(), &content)
}

/// Load every `*.toml` manifest in `dir`, in file name order.
///
/// A manifest that fails to parse is skipped with a warning so the others
/// still apply. Failing to read the directory itself is an error.
pub fn load_manifest_dir(dir: &Path) -> Result<Vec<ManifestContributor>, CatalogError> {
    let io_err = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut manifests = Vec::with_capacity(paths.len());
    for path in paths {
        match load_manifest(&path) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => warn!(error = %e, "skipping declaration manifest"),
        }
    }
    Ok(manifests)
}

/// Register manifests on `collector` in order.
pub fn register_manifests(
    collector: &mut DeclarationCollector,
    manifests: impl IntoIterator<Item = ManifestContributor>,
) {
    for manifest in manifests {
        collector.register(Box::new(manifest));
    }
}
