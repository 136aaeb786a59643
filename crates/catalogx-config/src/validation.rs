// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::CatalogConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first.
pub fn validate_config(config: &CatalogConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !is_css_identifier(&config.registry.default_panel) {
        errors.push(ConfigError::validation(
            "registry.default_panel",
            format!(
                "`{}` is not usable as a CSS class",
                config.registry.default_panel
            ),
        ));
    }

    if config.admin.edit_pages.is_empty() {
        errors.push(ConfigError::validation(
            "admin.edit_pages",
            "at least one edit page is required",
        ));
    }

    if config.admin.product_post_type.trim().is_empty() {
        errors.push(ConfigError::validation(
            "admin.product_post_type",
            "must not be empty",
        ));
    }

    for (key, font) in [
        ("admin.icon_font", &config.admin.icon_font),
        ("admin.host_icon_font", &config.admin.host_icon_font),
    ] {
        if font.trim().is_empty() {
            errors.push(ConfigError::validation(key, "must not be empty"));
        }
    }

    if config.manifests.paths.iter().any(|p| p.trim().is_empty()) {
        errors.push(ConfigError::validation(
            "manifests.paths",
            "manifest paths must not be empty",
        ));
    }

    if !LOG_LEVELS.contains(&config.logging.level.to_ascii_lowercase().as_str()) {
        errors.push(ConfigError::validation(
            "logging.level",
            format!(
                "`{}` is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_css_identifier(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(|c: char| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
