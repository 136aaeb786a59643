// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations.
//!
//! Each command renders to a `String` so the output can be tested without
//! capturing stdout.

use std::path::PathBuf;
use std::sync::Arc;

use catalogx_admin::{AdminScreen, icon_css, tab_descriptors, wiring_script};
use catalogx_config::CatalogConfig;
use catalogx_core::{CatalogError, is_default_type};
use catalogx_registry::{
    CustomizerRuntime, DeclarationCollector, InMemoryTaxonomy, Registry, RegistrySettings,
    load_manifest, load_manifest_dir, register_manifests,
};
use serde::Serialize;
use tracing::info;

/// Declaration sources given on the command line, applied after the
/// configured ones.
#[derive(Debug, Clone, Default)]
pub struct ManifestSources {
    pub paths: Vec<PathBuf>,
    pub dir: Option<PathBuf>,
}

/// What a subcommand prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Registry,
    Types,
    Options,
    Tabs,
    Wiring,
    Css,
    Script,
}

/// Collect every configured manifest, then the command-line ones.
///
/// Order: `manifests.paths`, `manifests.dir`, `--manifest`, `--manifest-dir`.
pub fn collector_for(
    config: &CatalogConfig,
    extra: &ManifestSources,
) -> Result<DeclarationCollector, CatalogError> {
    let mut collector = DeclarationCollector::new();

    let files = config
        .manifests
        .paths
        .iter()
        .map(PathBuf::from)
        .collect::<Vec<_>>();
    let dir = config.manifests.dir.as_ref().map(PathBuf::from);

    for (paths, dir) in [(&files, &dir), (&extra.paths, &extra.dir)] {
        let loaded = paths
            .iter()
            .map(|p| load_manifest(p))
            .collect::<Result<Vec<_>, _>>()?;
        register_manifests(&mut collector, loaded);
        if let Some(dir) = dir {
            register_manifests(&mut collector, load_manifest_dir(dir)?);
        }
    }

    Ok(collector)
}

/// Build the registry against an in-memory taxonomy seeded with the
/// built-in product types.
pub fn build_registry(
    config: &CatalogConfig,
    extra: &ManifestSources,
) -> Result<Arc<Registry>, CatalogError> {
    let collector = collector_for(config, extra)?;
    let settings = RegistrySettings {
        default_panel: config.registry.default_panel.clone(),
        default_priority: config.registry.default_priority,
    };

    let taxonomy = InMemoryTaxonomy::with_default_types();
    let registry = CustomizerRuntime::new(collector, settings).build(&taxonomy)?;

    let created: Vec<String> = taxonomy
        .terms()?
        .into_iter()
        .filter(|t| !is_default_type(t))
        .collect();
    if !created.is_empty() {
        info!(terms = ?created, "created product type terms");
    }

    Ok(registry)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CatalogError> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[derive(Serialize)]
struct SelectorEntry<'a> {
    slug: &'a str,
    name: &'a str,
}

/// Render `output` for `registry`. Screen-bound outputs assume the
/// configured product edit screen and are empty when nothing applies.
pub fn render(
    output: Output,
    registry: &Registry,
    config: &CatalogConfig,
) -> Result<String, CatalogError> {
    let screen = AdminScreen::product_edit(&config.admin);

    match output {
        Output::Registry => to_json(registry),
        Output::Types => {
            let entries = registry.type_selector_entries();
            let entries: Vec<SelectorEntry<'_>> = entries
                .iter()
                .map(|(slug, name)| SelectorEntry { slug, name })
                .collect();
            to_json(&entries)
        }
        Output::Options => to_json(&registry.option_field_specs()),
        Output::Tabs => to_json(&tab_descriptors(registry)),
        Output::Wiring => to_json(&registry.visibility_wiring_plan()),
        Output::Css => Ok(icon_css(registry, &screen, &config.admin).unwrap_or_default()),
        Output::Script => match wiring_script(registry, &screen, &config.admin) {
            Some(wiring) => Ok(wiring.render()?),
            None => Ok(String::new()),
        },
    }
}
