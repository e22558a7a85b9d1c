mod common;

use common::RecordingFactory;
use polyform::prelude::*;
use serde_json::json;
use tracing_test::traced_test;

fn engine() -> FanoutEngine<RecordingFactory> {
    polyform::fanout(
        RecordingFactory::new(),
        LocaleSet::new(["en", "nl"]),
        RenderConfig::minimal(),
    )
}

#[traced_test]
#[test]
fn render_pass_is_logged() {
    let mut form = engine();
    form.field("text", vec![json!("Input"), json!("input")])
        .render()
        .unwrap();
    assert!(logs_contain("rendering localized element"));
}

#[traced_test]
#[test]
fn discarded_field_is_warned_about() {
    let mut form = engine();
    form.field("text", vec![json!("Input"), json!("input")]);
    form.field("hidden", vec![json!("id")]);
    assert!(logs_contain("discarding unrendered field"));
}
