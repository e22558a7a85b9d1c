use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyform::prelude::*;
use serde_json::json;

fn locales(n: usize) -> LocaleSet {
    LocaleSet::new((0..n).map(|i| format!("l{i}")))
}

fn bench_text_fanout(c: &mut Criterion) {
    let mut form = polyform::html_engine(locales(2), RenderConfig::default());
    c.bench_function("text_2_locales", |b| {
        b.iter(|| {
            form.field("text", vec![json!("Title"), black_box(json!("title"))])
                .render()
        })
    });

    let mut form = polyform::html_engine(locales(24), RenderConfig::default());
    c.bench_function("text_24_locales", |b| {
        b.iter(|| {
            form.field("text", vec![json!("Title"), black_box(json!("title"))])
                .render()
        })
    });
}

fn bench_scoped_modifiers(c: &mut Criterion) {
    let mut form = polyform::html_engine(locales(8), RenderConfig::default());
    c.bench_function("scoped_modifiers_8_locales", |b| {
        b.iter(|| {
            form.field("text", vec![json!("Title"), json!("title")])
                .modifier("data", vec![json!("field"), json!("%name-%locale")])
                .modifier_for_locale("required", ["l0", "l3", "l7"], vec![])
                .modifier_for_locale("labelClass", "l1", vec![json!("x")])
                .render()
        })
    });
}

fn bench_bound_values(c: &mut Criterion) {
    let set = locales(8);
    let mut translations = serde_json::Map::new();
    for locale in &set {
        translations.insert(locale.clone(), json!(format!("title in {locale}")));
    }
    let mut form = polyform::html_engine(set, RenderConfig::default());
    form.factory_mut()
        .bind(JsonRecord::new(json!({"title": translations})));
    c.bench_function("bound_text_8_locales", |b| {
        b.iter(|| {
            form.field("text", vec![json!("Title"), json!("title")])
                .render()
        })
    });
}

fn bench_invoke(c: &mut Criterion) {
    let mut form = polyform::html_engine(locales(2), RenderConfig::default());
    c.bench_function("invoke_chain", |b| {
        b.iter(|| {
            form.invoke("text", vec![json!("Title"), json!("title")]).unwrap();
            form.invoke("dataForLocale", vec![json!("l1"), json!("k"), json!("v")]).unwrap();
            form.render()
        })
    });
}

criterion_group!(
    benches,
    bench_text_fanout,
    bench_scoped_modifiers,
    bench_bound_values,
    bench_invoke
);
criterion_main!(benches);
