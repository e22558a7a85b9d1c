//! # polyform — one form field, one rendition per locale
//!
//! `polyform` takes a declarative field request ("a text field labelled
//! *Title* named `title`"), and renders it once for every configured locale:
//! wire names embed the locale (`title[en]`, `title[nl]`), labels get a locale
//! indicator, inputs are stamped with a locale attribute, and modifiers can be
//! restricted to some locales only.
//!
//! Rendering itself is delegated to an [`ElementFactory`](factory::ElementFactory).
//! A small HTML factory ships behind the default `markup` feature.
//!
//! ## Quick Start
//!
//! ```rust
//! use polyform::prelude::*;
//! use serde_json::json;
//!
//! let locales = LocaleSet::new(["en", "nl"]);
//! let config = RenderConfig::default().label_indicator("%label (%locale)");
//! let mut form = polyform::html_engine(locales, config);
//!
//! let html = form
//!     .field("text", vec![json!("Title"), json!("title")])
//!     .modifier_for_locale("required", "en", vec![])
//!     .render()
//!     .unwrap();
//!
//! assert!(html.contains(r#"<input type="text" name="title[en]" class="form-control" id="title[en]" required="required" data-language="en">"#));
//! assert!(html.contains(r#"<input type="text" name="title[nl]" class="form-control" id="title[nl]" data-language="nl">"#));
//! ```

pub mod behavior;
pub mod binding;
pub mod config;
pub mod engine;
pub mod error;
pub mod factory;
pub mod field;
pub mod locale;
#[cfg(feature = "markup")]
pub mod markup;
pub mod placeholder;

// Re-export serde_json: arguments and bound values are JSON values
#[doc(hidden)]
pub use serde_json;

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create an engine over any factory with the given configuration.
pub fn fanout<F: factory::ElementFactory>(
    factory: F,
    locales: locale::LocaleSet,
    config: config::RenderConfig,
) -> engine::FanoutEngine<F> {
    engine::FanoutEngine::new(factory, locales).with_config(config)
}

/// Create an engine rendering HTML, with bound values resolved for `locales`.
#[cfg(feature = "markup")]
pub fn html_engine(
    locales: locale::LocaleSet,
    config: config::RenderConfig,
) -> engine::FanoutEngine<markup::HtmlFactory> {
    fanout(markup::HtmlFactory::new(), locales, config)
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Common imports for working with `polyform`.
pub mod prelude {
    pub use crate::behavior::{Behavior, BehaviorTable};
    pub use crate::binding::{BoundData, JsonRecord, ValueResolver};
    pub use crate::config::RenderConfig;
    pub use crate::engine::{Command, FanoutEngine, Invocation};
    pub use crate::error::ConfigError;
    pub use crate::factory::{Element, ElementFactory};
    pub use crate::field::{Arguments, LocaleScope, Modifier, PendingField};
    pub use crate::locale::{LocaleFilter, LocaleSet, WireFormat};
    #[cfg(feature = "markup")]
    pub use crate::markup::{HtmlElement, HtmlFactory, MarkupError};
}
