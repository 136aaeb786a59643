// SPDX-FileCopyrightText: 2026 Catalogx Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the declaration → registry pipeline.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use catalogx_core::{CatalogError, VisibilityAction};
use catalogx_registry::{
    CustomizerRuntime, DeclarationCollector, RawOption, RawTab, RawType, RegistrySettings,
    StringList, WiringRule,
};
use catalogx_test_utils::{CountingContributor, MockTaxonomy, StaticContributor};

fn runtime(collector: DeclarationCollector) -> CustomizerRuntime {
    CustomizerRuntime::new(collector, RegistrySettings::default())
}

#[test]
fn gift_wrap_scenario() {
    let collector = DeclarationCollector::new().with(StaticContributor::new("gifts").with_option(
        "gift_wrap",
        RawOption {
            label: Some("Gift wrap".into()),
            targets: StringList::from("simple"),
            default: false.into(),
            ..Default::default()
        },
    ));
    let registry = runtime(collector).build(&MockTaxonomy::new()).unwrap();

    let spec = registry
        .option_field_specs()
        .into_iter()
        .find(|s| s.id == "_gift_wrap")
        .expect("gift_wrap field spec");
    assert_eq!(spec.default, "no");
    assert_eq!(spec.wrapper_class, "show_if_simple");
    assert_eq!(spec.label.as_deref(), Some("Gift wrap"));
}

#[test]
fn padded_option_key_yields_clean_classes() {
    let collector = DeclarationCollector::new().with(
        StaticContributor::new("gifts")
            .with_type(" bundle ", RawType::default())
            .with_option(
                " gift_wrap ",
                RawOption {
                    targets: StringList::from("simple"),
                    show_groups: StringList::from("pricing"),
                    ..Default::default()
                },
            ),
    );
    let taxonomy = MockTaxonomy::new();
    let registry = runtime(collector).build(&taxonomy).unwrap();

    assert_eq!(taxonomy.inserted(), vec!["bundle"]);
    let spec = &registry.option_field_specs()[0];
    assert_eq!(spec.id, "_gift_wrap");
    assert_eq!(spec.wrapper_class, "show_if_simple");
    assert_eq!(registry.visibility_wiring_plan()[0].class_name(), "show_if_gift_wrap");
}

#[test]
fn bundle_scenario_wires_show_and_hide() {
    let collector = DeclarationCollector::new().with(
        StaticContributor::new("bundles")
            .with_type(
                "bundle",
                RawType {
                    extends: StringList::from(vec!["simple"]),
                    ..Default::default()
                },
            )
            .with_option(
                "bundle_qty",
                RawOption {
                    extends: StringList::from(vec!["bundle"]),
                    ..Default::default()
                },
            ),
    );
    let registry = runtime(collector).build(&MockTaxonomy::new()).unwrap();
    let plan = registry.visibility_wiring_plan();

    for (action, selector) in [
        (VisibilityAction::Show, ".show_if_bundle"),
        (VisibilityAction::Hide, ".hide_if_bundle"),
    ] {
        assert!(
            plan.contains(&WiringRule {
                action,
                selector: selector.to_string(),
                key: "bundle_qty".to_string(),
            }),
            "missing {action} rule for {selector}"
        );
    }

    // The option inherits the type's visibility as a `for` class.
    let opt = registry.option("bundle_qty").unwrap();
    assert!(opt.visibility.contains(&"show_if_bundle".to_string()));
}

#[test]
fn last_contributor_wins_without_field_merge() {
    let first = StaticContributor::new("first").with_option(
        "engraving",
        RawOption {
            label: Some("Engraving".into()),
            description: Some("Add a message".into()),
            targets: StringList::from("simple"),
            default: true.into(),
            ..Default::default()
        },
    );
    let second = StaticContributor::new("second").with_option(
        "engraving",
        RawOption {
            targets: StringList::from("variable"),
            ..Default::default()
        },
    );
    let collector = DeclarationCollector::new().with(first).with(second);
    let registry = runtime(collector).build(&MockTaxonomy::new()).unwrap();

    let opt = registry.option("engraving").unwrap();
    assert!(opt.label.is_none());
    assert!(opt.description.is_none());
    assert!(!opt.default);
    assert_eq!(opt.visibility, vec!["show_if_variable"]);
}

#[test]
fn redeclared_default_types_stay_out_of_selector() {
    let mut contributor = StaticContributor::new("overrides");
    for slug in ["simple", "grouped", "external", "variable", "variation", "bundle"] {
        contributor = contributor.with_type(
            slug,
            RawType {
                name: Some(slug.to_uppercase()),
                ..Default::default()
            },
        );
    }
    let registry = runtime(DeclarationCollector::new().with(contributor))
        .build(&MockTaxonomy::new())
        .unwrap();

    assert_eq!(registry.list_type_slugs_excluding_defaults(), vec!["bundle"]);
    // Built-ins are still part of the resolved model.
    assert!(registry.product_type("simple").is_some());
}

#[test]
fn taxonomy_terms_created_only_for_new_slugs() {
    let taxonomy = MockTaxonomy::with_terms(["simple"]);
    let collector = DeclarationCollector::new().with(
        StaticContributor::new("types")
            .with_type("simple", RawType::default())
            .with_type("bundle", RawType::default())
            .with_type("kit", RawType::default()),
    );
    runtime(collector).build(&taxonomy).unwrap();
    assert_eq!(taxonomy.inserted(), vec!["bundle", "kit"]);
}

#[test]
fn taxonomy_failure_is_fatal_and_not_cached() {
    let collector = DeclarationCollector::new()
        .with(StaticContributor::new("types").with_type("bundle", RawType::default()));
    let runtime = runtime(collector);

    let failing = MockTaxonomy::new().failing_on("bundle");
    let err = runtime.build(&failing).unwrap_err();
    assert!(matches!(err, CatalogError::Taxonomy { ref slug, .. } if slug == "bundle"));
    assert!(matches!(runtime.registry(), Err(CatalogError::NotInitialized)));

    let healthy = MockTaxonomy::new();
    assert!(runtime.build(&healthy).is_ok());
    assert_eq!(healthy.inserted(), vec!["bundle"]);
}

#[test]
fn concurrent_first_access_builds_once() {
    let counting = CountingContributor::new(
        StaticContributor::new("types").with_type("bundle", RawType::default()),
    );
    let calls = counting.counter();
    let runtime = Arc::new(runtime(DeclarationCollector::new().with(counting)));
    let taxonomy = Arc::new(MockTaxonomy::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let runtime = Arc::clone(&runtime);
            let taxonomy = Arc::clone(&taxonomy);
            std::thread::spawn(move || runtime.build(taxonomy.as_ref()).unwrap())
        })
        .collect();

    let registries: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(taxonomy.inserted(), vec!["bundle"]);
    assert!(registries.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

#[test]
fn owned_and_explicit_tabs_resolve_together() {
    let tab = |id: &str, prio: Option<i64>| RawTab {
        id: Some(id.into()),
        label: Some(id.to_uppercase()),
        priority: prio,
        ..Default::default()
    };
    let collector = DeclarationCollector::new().with(
        StaticContributor::new("tabs")
            .with_type(
                "bundle",
                RawType {
                    extends: StringList::from("simple"),
                    tabs: vec![tab("bundle_items", Some(10)), tab("shared", None)],
                    ..Default::default()
                },
            )
            .with_option(
                "gift_wrap",
                RawOption {
                    targets: StringList::from("simple"),
                    tabs: vec![tab("wrapping", Some(10))],
                    ..Default::default()
                },
            )
            .with_tabs("care", vec![tab("shared", Some(5))]),
    );
    let registry = runtime(collector).build(&MockTaxonomy::new()).unwrap();

    let order: Vec<&str> = registry
        .tabs_in_priority_order()
        .iter()
        .map(|t| t.key.as_str())
        .collect();
    // `shared` keeps its first registration slot but takes the explicit priority.
    assert_eq!(order, vec!["shared", "bundle_items", "wrapping"]);

    let shared = registry.tab("shared").unwrap();
    assert_eq!(shared.visibility, vec!["show_if_care"]);
    assert_eq!(shared.target, "shared_product_data");

    let items = registry.tab("bundle_items").unwrap();
    assert_eq!(items.visibility, vec!["show_if_bundle", "show_if_simple"]);
}

#[test]
fn repeated_builds_serialize_identically() {
    let make = || {
        DeclarationCollector::new().with(
            StaticContributor::new("all")
                .with_type(
                    "bundle",
                    RawType {
                        extends: StringList::from("simple"),
                        tabs: vec![RawTab {
                            id: Some("bundle_items".into()),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                )
                .with_option("gift_wrap", RawOption::default()),
        )
    };

    let a = runtime(make()).build(&MockTaxonomy::new()).unwrap();
    let b = runtime(make()).build(&MockTaxonomy::new()).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(a.as_ref()).unwrap(),
        serde_json::to_string(b.as_ref()).unwrap()
    );
}
