use polyform::prelude::*;
use serde_json::{json, Value};

fn resolver() -> ValueResolver {
    ValueResolver::new(LocaleSet::new(["en", "nl"]), WireFormat::Suffixed)
}

fn record() -> JsonRecord {
    JsonRecord::new(json!({
        "default": "model",
        "input": {"en": "translation", "nl": "vertaling"},
        "partial": {"en": "only english"}
    }))
}

#[test]
fn translated_value_for_localized_name() {
    let record = record();
    let value = resolver().resolve(Some(&record), "input[nl]", json!("D"));
    assert_eq!(value, json!("vertaling"));
}

#[test]
fn missing_translation_is_empty_not_default() {
    let record = record();
    let value = resolver().resolve(Some(&record), "partial[nl]", json!("D"));
    assert_eq!(value, json!(""));
    let value = resolver().resolve(Some(&record), "absent[en]", json!("D"));
    assert_eq!(value, json!(""));
}

#[test]
fn plain_name_reads_attribute_or_default() {
    let record = record();
    assert_eq!(resolver().resolve(Some(&record), "default", json!("D")), json!("model"));
    assert_eq!(resolver().resolve(Some(&record), "nothing", json!("D")), json!("D"));
}

#[test]
fn no_bound_data_yields_default() {
    assert_eq!(resolver().resolve(None, "default", json!("D")), json!("D"));
    assert_eq!(resolver().resolve(None, "input[nl]", json!("D")), json!("D"));
}

#[test]
fn malformed_names_fall_through_to_plain_lookup() {
    let record = JsonRecord::new(json!({"a[b][c]": "x", "]en[": "y"}));
    assert_eq!(resolver().resolve(Some(&record), "a[b][c]", Value::Null), json!("x"));
    assert_eq!(resolver().resolve(Some(&record), "]en[", Value::Null), json!("y"));
}

#[test]
fn localized_decomposition() {
    assert_eq!(
        resolver().localized("input[en]"),
        Some(("input".to_string(), "en".to_string()))
    );
    assert_eq!(resolver().localized("input[fr]"), None);
    assert_eq!(resolver().localized("input"), None);
}

#[test]
fn non_object_record_is_empty() {
    let record = JsonRecord::new(json!(["not", "a", "record"]));
    assert!(record.attributes().is_empty());
    assert_eq!(resolver().resolve(Some(&record), "x", json!(1)), json!(1));
}

struct Fixed;

impl BoundData for Fixed {
    fn get(&self, name: &str) -> Option<Value> {
        Some(json!(format!("plain:{name}")))
    }

    fn translation(&self, name: &str, locale: &str) -> Option<Value> {
        Some(json!(format!("{name}@{locale}")))
    }
}

#[test]
fn custom_bound_data() {
    let resolver = resolver();
    assert_eq!(resolver.resolve(Some(&Fixed), "title[en]", Value::Null), json!("title@en"));
    assert_eq!(resolver.resolve(Some(&Fixed), "title", Value::Null), json!("plain:title"));
}
