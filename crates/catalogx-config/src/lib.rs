// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for the Catalogx product customizer.
//!
//! TOML files are layered through Figment (system, user, local) with
//! `CATALOGX_*` environment overrides. Unknown keys are rejected and
//! reported as miette diagnostics with typo suggestions.
//!
//! ```no_run
//! use catalogx_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("default panel: {}", config.registry.default_panel);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AdminConfig, CatalogConfig, LoggingConfig, ManifestsConfig, RegistryConfig};

/// Load configuration from the standard hierarchy and validate it.
pub fn load_and_validate() -> Result<CatalogConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(
            err,
            &collect_toml_sources(),
        )),
    }
}

/// Load one explicit config file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<CatalogConfig, Vec<ConfigError>> {
    tracing::debug!(path = %path.display(), "loading configuration file");
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources: Vec<(String, String)> = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<CatalogConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

fn collect_toml_sources() -> Vec<(String, String)> {
    let local = std::env::current_dir()
        .map(|d| d.join(loader::CONFIG_FILE))
        .unwrap_or_else(|_| loader::CONFIG_FILE.into());

    [
        Some(Path::new(loader::SYSTEM_CONFIG).to_path_buf()),
        loader::user_config_path(),
        Some(local),
    ]
    .into_iter()
    .flatten()
    .filter_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        Some((path.display().to_string(), content))
    })
    .collect()
}
