use polyform_config::prelude::*;
use serde_json::json;

fn main() {
    println!("=== Valid settings ===");
    let value = json!({
        "locales": ["en", "nl"],
        "render": {"label-locale-indicator": "%label (%locale)"}
    });
    let settings = match from_value(&value) {
        Ok(settings) => settings,
        Err(e) => {
            println!("Error: {e}");
            return;
        }
    };
    println!("{settings:?}");

    println!("\n=== Invalid settings ===");
    let bad = json!({"locales": ["en", "e n]"], "render": {"label-locale-indicator": "?"}});
    if let Err(e) = from_value(&bad) {
        println!("Error: {e}");
    }

    println!("\n=== Rendering ===");
    let mut form = settings.html_engine();
    match form
        .field("text", vec![json!("Title"), json!("title")])
        .modifier_for_locale("required", "en", vec![])
        .render()
    {
        Ok(html) => println!("{html}"),
        Err(e) => println!("Error: {e}"),
    }
}
