// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product data tabs and their panel containers.

use catalogx_registry::{DeclarationMap, Registry};
use serde::Serialize;

use crate::escape::{esc_attr, sanitize_html_class};

/// Style applied to every panel container; the host reveals the active one.
pub const PANEL_STYLE: &str = "display: none;";

/// Class every panel container carries.
pub const PANEL_CLASS: &str = "panel";

/// Prefix of the hook that fills a panel with its fields.
pub const CONTENT_HOOK_PREFIX: &str = "catalogx_product_options_";

/// A tab as the host's tab list consumes it.
///
/// Icons are drawn through [`crate::icon_css`] and are not part of the
/// descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabDescriptor {
    pub label: Option<String>,
    pub target: String,
    pub class: Vec<String>,
    pub priority: i64,
}

/// Tabs keyed by registry key, in priority order.
pub fn tab_descriptors(registry: &Registry) -> DeclarationMap<TabDescriptor> {
    registry
        .tabs_in_priority_order()
        .into_iter()
        .map(|tab| {
            (
                tab.key.clone(),
                TabDescriptor {
                    label: tab.label.clone(),
                    target: tab.target.clone(),
                    class: tab.visibility.clone(),
                    priority: tab.priority,
                },
            )
        })
        .collect()
}

/// Host tabs with every registered tab written over its key.
pub fn merge_tabs(
    mut host: DeclarationMap<TabDescriptor>,
    registry: &Registry,
) -> DeclarationMap<TabDescriptor> {
    host.extend(tab_descriptors(registry));
    host
}

/// The hidden container a tab's target points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelContainer {
    pub key: String,
    pub id: String,
    pub classes: Vec<String>,
    pub style: &'static str,
    pub content_hook: String,
}

impl PanelContainer {
    /// Opening tag with every attribute escaped.
    pub fn open_tag(&self) -> String {
        format!(
            r#"<div id="{}" class="{}" style="{}">"#,
            esc_attr(&self.id),
            esc_attr(&self.classes.join(" ")),
            esc_attr(self.style),
        )
    }
}

/// One container per registered tab, in registration order.
pub fn panel_containers(registry: &Registry) -> Vec<PanelContainer> {
    registry
        .tabs()
        .map(|tab| {
            let mut classes: Vec<String> = Vec::with_capacity(tab.panels.len() + 1);
            for class in tab
                .panels
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(PANEL_CLASS))
                .map(sanitize_html_class)
            {
                if !class.is_empty() && !classes.contains(&class) {
                    classes.push(class);
                }
            }

            PanelContainer {
                key: tab.key.clone(),
                id: tab.target.clone(),
                classes,
                style: PANEL_STYLE,
                content_hook: format!("{CONTENT_HOOK_PREFIX}{}", tab.key),
            }
        })
        .collect()
}

/// Render every panel container, asking `fill` for each tab's inner HTML.
pub fn render_panels(registry: &Registry, mut fill: impl FnMut(&PanelContainer) -> String) -> String {
    let mut html = String::new();
    for panel in panel_containers(registry) {
        html.push_str(&panel.open_tag());
        html.push_str(&fill(&panel));
        html.push_str("</div>");
    }
    html
}
