// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./catalogx.toml` > `~/.config/catalogx/catalogx.toml` >
//! `/etc/catalogx/catalogx.toml`, with `CATALOGX_` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::CatalogConfig;

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "CATALOGX_";

/// Path of the system-wide config file.
pub const SYSTEM_CONFIG: &str = "/etc/catalogx/catalogx.toml";

/// Name of the local and per-user config file.
pub const CONFIG_FILE: &str = "catalogx.toml";

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/catalogx/catalogx.toml`
/// 3. `~/.config/catalogx/catalogx.toml`
/// 4. `./catalogx.toml`
/// 5. `CATALOGX_*` environment variables
pub fn load_config() -> Result<CatalogConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<CatalogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CatalogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// The Figment used by [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(CatalogConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/catalogx/catalogx.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("catalogx").join(CONFIG_FILE))
}

/// Config sections addressable from the environment.
const ENV_SECTIONS: &[&str] = &["registry", "admin", "manifests", "logging"];

/// Environment provider with explicit section mapping.
///
/// Keys contain underscores (`default_panel`), so only the first segment
/// after the prefix names the section: `CATALOGX_REGISTRY_DEFAULT_PANEL`
/// maps to `registry.default_panel`.
fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).map(|key| section_key(key.as_str()).into())
}

/// Env keys arrive with their original case; figment lowercases them later.
fn section_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|r| r.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key
}
