// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Catalogx product customizer.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of silently ignored.

use serde::{Deserialize, Serialize};

/// Top-level Catalogx configuration.
///
/// Every section is optional and defaults to the host conventions.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Defaults applied while resolving declarations.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Product edit screen and asset rendering settings.
    #[serde(default)]
    pub admin: AdminConfig,

    /// Where declaration manifests are loaded from.
    #[serde(default)]
    pub manifests: ManifestsConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Registry defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Panel group used for tabs that declare none.
    #[serde(default = "default_panel")]
    pub default_panel: String,

    /// Priority used for tabs that declare none.
    #[serde(default = "default_priority")]
    pub default_priority: i64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_panel: default_panel(),
            default_priority: default_priority(),
        }
    }
}

fn default_panel() -> String {
    "options_panel".to_string()
}

fn default_priority() -> i64 {
    21
}

/// Product edit screen settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Admin pages that count as the product edit screen.
    #[serde(default = "default_edit_pages")]
    pub edit_pages: Vec<String>,

    /// Post type of product records.
    #[serde(default = "default_product_post_type")]
    pub product_post_type: String,

    /// Selector prefix of a tab list item in the product data box.
    #[serde(default = "default_tab_selector_prefix")]
    pub tab_selector_prefix: String,

    /// Icon prefix selecting the host's icon font; stripped before use.
    #[serde(default = "default_host_icon_prefix")]
    pub host_icon_prefix: String,

    /// The host's own icon font.
    #[serde(default = "default_host_icon_font")]
    pub host_icon_font: String,

    /// Icon font used for unprefixed icons.
    #[serde(default = "default_icon_font")]
    pub icon_font: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            edit_pages: default_edit_pages(),
            product_post_type: default_product_post_type(),
            tab_selector_prefix: default_tab_selector_prefix(),
            host_icon_prefix: default_host_icon_prefix(),
            host_icon_font: default_host_icon_font(),
            icon_font: default_icon_font(),
        }
    }
}

fn default_edit_pages() -> Vec<String> {
    vec!["post.php".to_string(), "post-new.php".to_string()]
}

fn default_product_post_type() -> String {
    "product".to_string()
}

fn default_tab_selector_prefix() -> String {
    "#woocommerce-product-data ul.wc-tabs li".to_string()
}

fn default_host_icon_prefix() -> String {
    "woo:".to_string()
}

fn default_host_icon_font() -> String {
    "woocommerce".to_string()
}

fn default_icon_font() -> String {
    "Dashicons".to_string()
}

/// Declaration manifest sources.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestsConfig {
    /// Individual manifest files, applied in order.
    #[serde(default)]
    pub paths: Vec<String>,

    /// Directory whose `*.toml` files are applied after `paths`, by file name.
    #[serde(default)]
    pub dir: Option<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
