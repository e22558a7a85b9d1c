//! Property-based invariants of the fanout engine.
//!
//! 1. Wire names decode back to `(base, locale)` for both layouts.
//! 2. A rendered field yields one element per locale in set ∩ filter, in set order.
//! 3. Decorated labels match the template per locale and never collide.
//! 4. Value resolution never panics on arbitrary names.

mod common;

use common::RecordingFactory;
use polyform::prelude::*;
use proptest::prelude::*;
use serde_json::json;

fn arb_locale() -> impl Strategy<Value = String> {
    "[a-z]{2}(_[A-Z]{2})?"
}

fn arb_locales() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_locale(), 1..6)
}

fn arb_name() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,12}"
}

fn arb_format() -> impl Strategy<Value = WireFormat> {
    prop_oneof![Just(WireFormat::Suffixed), Just(WireFormat::Prefixed)]
}

proptest! {
    #[test]
    fn wire_names_are_reversible(base in arb_name(), locale in arb_locale(), format in arb_format()) {
        let wire = format.encode(&base, &locale);
        prop_assert_eq!(format.parse(&wire), Some((base, locale)));
    }

    #[test]
    fn fanout_matches_filtered_locales(
        locales in arb_locales(),
        wanted in arb_locales(),
        name in arb_name(),
        format in arb_format(),
    ) {
        let set = LocaleSet::new(locales);
        let expected: Vec<String> = set
            .iter()
            .filter(|l| wanted.contains(l))
            .cloned()
            .collect();

        let config = RenderConfig::minimal().wire_format(format);
        let mut form = polyform::fanout(RecordingFactory::new(), set, config);
        form.field("text", vec![json!("Label"), json!(name.clone())])
            .render_locale(wanted.clone())
            .unwrap();

        let log = form.factory().log();
        prop_assert_eq!(log.len(), expected.len());
        for (record, locale) in log.iter().zip(&expected) {
            let wire = record.args[1].as_str().unwrap().to_string();
            prop_assert_eq!(format.parse(&wire), Some((name.clone(), locale.clone())));
        }
    }

    #[test]
    fn labels_follow_the_template(locales in arb_locales(), label in "[A-Za-z ]{1,20}") {
        let set = LocaleSet::new(locales);
        let config = RenderConfig::minimal().label_indicator("%label (%locale)");
        let mut form = polyform::fanout(RecordingFactory::new(), set.clone(), config);
        form.field("textarea", vec![json!(label.clone()), json!("body")])
            .render()
            .unwrap();

        let labels: Vec<String> = form
            .factory()
            .log()
            .iter()
            .map(|r| r.args[0].as_str().unwrap().to_string())
            .collect();
        prop_assert_eq!(labels.len(), set.len());
        for (text, locale) in labels.iter().zip(set.iter()) {
            prop_assert_eq!(text, &format!("{} ({})", label, locale));
        }
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn resolution_never_panics(name in ".*", locales in arb_locales()) {
        let resolver = ValueResolver::new(LocaleSet::new(locales), WireFormat::Suffixed);
        let record = JsonRecord::new(json!({"a": "b", "c": {"en": "d"}}));
        let _ = resolver.resolve(Some(&record), &name, json!(null));
    }
}
