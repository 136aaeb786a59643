// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline CSS and script emitted on the product edit screen.

use catalogx_config::AdminConfig;
use catalogx_core::VisibilityAction;
use catalogx_registry::Registry;
use serde::Serialize;
use tracing::debug;

use crate::escape::{esc_attr, script_safe_json};
use crate::screen::AdminScreen;

/// Tab icon rules, wrapped in a `<style>` element.
///
/// `None` off the product edit screen or when no tab has an icon.
pub fn icon_css(registry: &Registry, screen: &AdminScreen, config: &AdminConfig) -> Option<String> {
    if !screen.is_product_edit(config) {
        return None;
    }

    let rules: Vec<String> = registry
        .tabs()
        .filter_map(|tab| {
            let icon = tab.icon.as_deref().filter(|i| !i.is_empty())?;
            let (glyph, font) = match icon.strip_prefix(config.host_icon_prefix.as_str()) {
                Some(glyph) if !config.host_icon_prefix.is_empty() => {
                    (glyph, config.host_icon_font.as_str())
                }
                _ => (icon, config.icon_font.as_str()),
            };
            Some(format!(
                "{}.{}_options a::before {{ content: \"{}\"; font-family: {}, sans-serif; }}\n",
                config.tab_selector_prefix,
                esc_attr(&tab.key),
                esc_attr(glyph),
                esc_attr(font),
            ))
        })
        .collect();

    if rules.is_empty() {
        return None;
    }

    debug!(rules = rules.len(), "emitting tab icon css");
    Some(format!("<style type=\"text/css\">{}</style>", rules.concat()))
}

/// A single class assignment the client script performs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptRule {
    pub action: VisibilityAction,
    pub selector: String,
    pub key: String,
    pub class: String,
}

/// Data handed to the client-side visibility toggler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WiringDescriptor {
    pub rules: Vec<ScriptRule>,
    pub options: Vec<String>,
}

const TOGGLER: &str = r#"jQuery(($) => {
    const toggle = ($show, $hide, checked = true) => {
        $show.toggle(checked);
        $hide.toggle(!checked);
    };
    catalogxRules.forEach((rule) => $(rule.selector).addClass(rule.class));
    catalogxOptions.forEach((opt) => {
        const $box = $(`input#_${opt}`);
        const $show = $(`.show_if_${opt}`);
        const $hide = $(`.hide_if_${opt}`);
        $box.on('change', (e) => toggle($show, $hide, $(e.target).prop('checked')));
        toggle($show, $hide, $box.prop('checked'));
    });
    $('select#product-type').change();
});"#;

impl WiringDescriptor {
    /// The `<script>` element assigning both data sets and running the toggler.
    pub fn render(&self) -> Result<String, serde_json::Error> {
        let rules = script_safe_json(&serde_json::to_string(&self.rules)?);
        let options = script_safe_json(&serde_json::to_string(&self.options)?);
        Ok(format!(
            "<!-- catalogx visibility -->\n<script>\nvar catalogxRules = {rules};\nvar catalogxOptions = {options};\n{TOGGLER}\n</script>\n"
        ))
    }
}

/// The visibility wiring for the product edit screen.
///
/// `None` off that screen, when the plan is empty, or when no option is
/// registered.
pub fn wiring_script(
    registry: &Registry,
    screen: &AdminScreen,
    config: &AdminConfig,
) -> Option<WiringDescriptor> {
    if !screen.is_product_edit(config) {
        return None;
    }

    let plan = registry.visibility_wiring_plan();
    let options = registry.option_keys();
    if plan.is_empty() || options.is_empty() {
        return None;
    }

    let rules = plan
        .into_iter()
        .map(|rule| ScriptRule {
            class: rule.class_name(),
            action: rule.action,
            selector: rule.selector,
            key: rule.key,
        })
        .collect();

    Some(WiringDescriptor { rules, options })
}
