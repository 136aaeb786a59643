// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use catalogx_config::AdminConfig;
use serde::{Deserialize, Serialize};

/// The admin page currently being rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminScreen {
    /// Admin page name, e.g. `post.php`.
    pub page: String,
    /// Post type being edited, if the page edits one.
    pub post_type: Option<String>,
}

impl AdminScreen {
    pub fn new(page: impl Into<String>, post_type: Option<&str>) -> Self {
        Self {
            page: page.into(),
            post_type: post_type.map(String::from),
        }
    }

    /// The product edit screen the configured host uses.
    pub fn product_edit(config: &AdminConfig) -> Self {
        Self {
            page: config
                .edit_pages
                .first()
                .cloned()
                .unwrap_or_else(|| "post.php".to_string()),
            post_type: Some(config.product_post_type.clone()),
        }
    }

    /// True on an edit page for the configured product post type.
    pub fn is_product_edit(&self, config: &AdminConfig) -> bool {
        config.edit_pages.iter().any(|p| *p == self.page)
            && self.post_type.as_deref() == Some(config.product_post_type.as_str())
    }
}
