// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product edit screen adapter.
//!
//! Turns a resolved [`catalogx_registry::Registry`] into what the host's
//! product editor consumes: extra type selector entries, option checkboxes,
//! data tabs with their hidden panels, tab icon CSS and the client-side
//! visibility script. Nothing here mutates the registry.

pub mod assets;
pub mod escape;
pub mod fields;
pub mod screen;
pub mod tabs;

pub use assets::{ScriptRule, WiringDescriptor, icon_css, wiring_script};
pub use escape::{esc_attr, sanitize_html_class};
pub use fields::{merge_option_fields, merge_type_selector};
pub use screen::AdminScreen;
pub use tabs::{
    PanelContainer, TabDescriptor, merge_tabs, panel_containers, render_panels, tab_descriptors,
};
