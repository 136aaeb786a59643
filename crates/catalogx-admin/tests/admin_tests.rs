// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the product edit screen adapter.

use std::sync::Arc;

use catalogx_admin::{
    AdminScreen, TabDescriptor, icon_css, merge_option_fields, merge_tabs, merge_type_selector,
    panel_containers, render_panels, tab_descriptors, wiring_script,
};
use catalogx_config::AdminConfig;
use catalogx_core::VisibilityAction;
use catalogx_registry::{
    CustomizerRuntime, DeclarationCollector, DeclarationMap, OptionFieldSpec, RawOption, RawTab,
    RawType, Registry, RegistrySettings, StringList,
};
use catalogx_test_utils::{MockTaxonomy, StaticContributor};

fn build(contributor: StaticContributor) -> Arc<Registry> {
    CustomizerRuntime::new(
        DeclarationCollector::new().with(contributor),
        RegistrySettings::default(),
    )
    .build(&MockTaxonomy::new())
    .expect("registry builds")
}

fn shop() -> Arc<Registry> {
    build(
        StaticContributor::new("shop")
            .with_type(
                "bundle",
                RawType {
                    name: Some("Bundle".into()),
                    extends: StringList::from("simple"),
                    show_groups: StringList::from("pricing"),
                    tabs: vec![RawTab {
                        id: Some("bundle_items".into()),
                        label: Some("Items".into()),
                        icon: Some("woo:\\e006".into()),
                        priority: Some(5),
                        ..Default::default()
                    }],
                    ..Default::default()
                },
            )
            .with_type(
                "simple",
                RawType {
                    name: Some("Plain".into()),
                    ..Default::default()
                },
            )
            .with_option(
                "gift_wrap",
                RawOption {
                    label: Some("Gift wrap".into()),
                    targets: StringList::from("simple, bundle"),
                    default: true.into(),
                    show_tabs: StringList::from("shipping"),
                    ..Default::default()
                },
            )
            .with_tabs(
                "extras",
                vec![RawTab {
                    id: Some("care".into()),
                    label: Some("Care".into()),
                    icon: Some("\\f123".into()),
                    panel: StringList::from(vec!["options_panel", "hidden panel"]),
                    ..Default::default()
                }],
            ),
    )
}

fn edit_screen() -> AdminScreen {
    AdminScreen::new("post.php", Some("product"))
}

#[test]
fn type_selector_adds_custom_types_only() {
    let host: DeclarationMap<String> = [("simple", "Simple product"), ("variable", "Variable")]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

    let merged = merge_type_selector(host, &shop());
    let entries: Vec<(&str, &str)> = merged.iter().map(|(k, v)| (k, v.as_str())).collect();
    assert_eq!(
        entries,
        vec![
            ("simple", "Simple product"),
            ("variable", "Variable"),
            ("bundle", "Bundle")
        ]
    );
}

#[test]
fn option_fields_overwrite_host_entries() {
    let mut host = DeclarationMap::new();
    host.insert(
        "gift_wrap",
        OptionFieldSpec {
            id: "_gift_wrap".into(),
            label: Some("Old".into()),
            description: None,
            default: "no".into(),
            wrapper_class: String::new(),
        },
    );
    host.insert(
        "virtual",
        OptionFieldSpec {
            id: "_virtual".into(),
            label: Some("Virtual".into()),
            description: None,
            default: "no".into(),
            wrapper_class: "show_if_simple".into(),
        },
    );

    let merged = merge_option_fields(host, &shop());
    assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["gift_wrap", "virtual"]);

    let gift = merged.get("gift_wrap").expect("gift_wrap field");
    assert_eq!(gift.label.as_deref(), Some("Gift wrap"));
    assert_eq!(gift.default, "yes");
    assert_eq!(gift.wrapper_class, "show_if_simple show_if_bundle");
    assert_eq!(merged.get("virtual").map(|f| f.label.as_deref()), Some(Some("Virtual")));
}

#[test]
fn tab_descriptors_follow_priority() {
    let tabs = tab_descriptors(&shop());
    assert_eq!(tabs.keys().collect::<Vec<_>>(), vec!["bundle_items", "care"]);

    let items = tabs.get("bundle_items").expect("owned tab");
    assert_eq!(items.target, "bundle_items_product_data");
    assert_eq!(items.priority, 5);
    assert_eq!(items.class, vec!["show_if_bundle", "show_if_simple"]);

    let care = tabs.get("care").expect("explicit tab");
    assert_eq!(care.priority, 21);
    assert_eq!(care.class, vec!["show_if_extras"]);
}

#[test]
fn registered_tabs_replace_host_tabs() {
    let mut host = DeclarationMap::new();
    host.insert(
        "care",
        TabDescriptor {
            label: Some("Host care".into()),
            target: "host_care".into(),
            class: Vec::new(),
            priority: 90,
        },
    );

    let merged = merge_tabs(host, &shop());
    assert_eq!(merged.len(), 2);
    assert_eq!(
        merged.get("care").map(|t| t.target.as_str()),
        Some("care_product_data")
    );
}

#[test]
fn panels_are_hidden_and_sanitized() {
    let panels = panel_containers(&shop());
    assert_eq!(panels.len(), 2);

    let care = panels.iter().find(|p| p.key == "care").expect("care panel");
    assert_eq!(care.id, "care_product_data");
    assert_eq!(care.classes, vec!["options_panel", "hiddenpanel", "panel"]);
    assert_eq!(care.style, "display: none;");
    assert_eq!(care.content_hook, "catalogx_product_options_care");

    let items = panels.iter().find(|p| p.key == "bundle_items").expect("items panel");
    assert_eq!(items.classes, vec!["options_panel", "panel"]);
}

#[test]
fn render_panels_wraps_filled_content() {
    let html = render_panels(&shop(), |panel| format!("<p>{}</p>", panel.key));
    assert!(html.starts_with(
        r#"<div id="bundle_items_product_data" class="options_panel panel" style="display: none;"><p>bundle_items</p></div>"#
    ));
    assert!(html.contains(r#"<div id="care_product_data" class="options_panel hiddenpanel panel""#));
    assert_eq!(html.matches("</div>").count(), 2);
}

#[test]
fn panel_ids_are_escaped() {
    let registry = build(StaticContributor::new("odd").with_tabs(
        "g",
        vec![RawTab {
            id: Some("x\"y".into()),
            ..Default::default()
        }],
    ));
    let html = render_panels(&registry, |_| String::new());
    assert!(html.contains(r#"id="x&quot;y_product_data""#));
}

#[test]
fn icon_css_picks_font_by_prefix() {
    let config = AdminConfig::default();
    let css = icon_css(&shop(), &edit_screen(), &config).expect("icons present");

    assert!(css.starts_with("<style type=\"text/css\">"));
    assert!(css.contains(
        "#woocommerce-product-data ul.wc-tabs li.bundle_items_options a::before { content: \"\\e006\"; font-family: woocommerce, sans-serif; }"
    ));
    assert!(css.contains(
        "li.care_options a::before { content: \"\\f123\"; font-family: Dashicons, sans-serif; }"
    ));
}

#[test]
fn icon_css_is_skipped_off_screen_or_without_icons() {
    let config = AdminConfig::default();
    assert!(icon_css(&shop(), &AdminScreen::new("edit.php", Some("product")), &config).is_none());

    let plain = build(StaticContributor::new("plain").with_tabs(
        "g",
        vec![RawTab {
            id: Some("notes".into()),
            icon: Some(String::new()),
            ..Default::default()
        }],
    ));
    assert!(icon_css(&plain, &edit_screen(), &config).is_none());
}

#[test]
fn wiring_script_carries_rules_and_options() {
    let config = AdminConfig::default();
    let wiring = wiring_script(&shop(), &edit_screen(), &config).expect("wiring present");

    assert_eq!(wiring.options, vec!["gift_wrap"]);
    let first = &wiring.rules[0];
    assert_eq!(first.key, "gift_wrap");
    assert_eq!(first.selector, ".shipping_options");
    assert_eq!(first.class, "show_if_gift_wrap");

    assert!(wiring.rules.iter().any(|r| r.action == VisibilityAction::Hide
        && r.selector == ".hide_if_simple"
        && r.class == "hide_if_bundle"));

    let html = wiring.render().expect("renders");
    assert!(html.contains("var catalogxOptions = [\"gift_wrap\"];"));
    assert!(html.contains("\"selector\":\".options_group.pricing\""));
    assert!(html.contains("$('select#product-type').change();"));
    assert!(html.trim_end().ends_with("</script>"));
}

#[test]
fn wiring_script_needs_options_and_rules() {
    let config = AdminConfig::default();
    let types_only = build(StaticContributor::new("t").with_type(
        "bundle",
        RawType {
            extends: StringList::from("simple"),
            ..Default::default()
        },
    ));
    assert!(wiring_script(&types_only, &edit_screen(), &config).is_none());

    let no_rules = build(StaticContributor::new("o").with_option("gift_wrap", RawOption::default()));
    assert!(wiring_script(&no_rules, &edit_screen(), &config).is_none());

    assert!(wiring_script(&shop(), &AdminScreen::new("post.php", Some("page")), &config).is_none());
}
