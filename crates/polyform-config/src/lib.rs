//! # polyform-config — load locales and render options for `polyform`
//!
//! Reads a [`Settings`] document (the locale list plus a [`RenderConfig`])
//! from [config-rs](https://docs.rs/config) or
//! [figment](https://docs.rs/figment) sources and checks it before any
//! engine is built.
//!
//! ```toml
//! locales = ["en", "nl"]
//!
//! [render]
//! form-group-class = "form-group-translation"
//! label-locale-indicator = "%label (%locale)"
//! input-locale-attribute = "data-language"
//! wire-format = "suffixed"
//! ```
//!
//! # Quick Start (config-rs)
//!
//! ```rust,no_run
//! use polyform_config::from_config;
//!
//! let config = config::Config::builder()
//!     .add_source(config::File::with_name("forms"))
//!     .add_source(config::Environment::with_prefix("FORMS").separator("__"))
//!     .build()
//!     .unwrap();
//!
//! let settings = from_config(&config).unwrap();
//! let form = settings.html_engine();
//! ```

use std::fmt;

use polyform::config::RenderConfig;
use polyform::engine::FanoutEngine;
use polyform::error::ConfigError;
use polyform::factory::ElementFactory;
use polyform::locale::LocaleSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error type for settings loading.
#[derive(Debug)]
pub enum PolyformConfigError {
    /// Failed to extract/deserialize the source into JSON.
    Source(String),
    /// The settings are malformed or unusable.
    Validation(ConfigError),
}

impl fmt::Display for PolyformConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyformConfigError::Source(msg) => write!(f, "config error: {msg}"),
            PolyformConfigError::Validation(err) => write!(f, "validation error: {err}"),
        }
    }
}

impl std::error::Error for PolyformConfigError {}

impl From<ConfigError> for PolyformConfigError {
    fn from(err: ConfigError) -> Self {
        PolyformConfigError::Validation(err)
    }
}

/// Everything needed to build an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub locales: LocaleSet,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Settings {
    /// Engine over `factory` using these locales and options.
    pub fn engine<F: ElementFactory>(&self, factory: F) -> FanoutEngine<F> {
        polyform::fanout(factory, self.locales.clone(), self.render.clone())
    }

    /// HTML engine resolving bound values for these locales.
    pub fn html_engine(&self) -> FanoutEngine<polyform::markup::HtmlFactory> {
        polyform::html_engine(self.locales.clone(), self.render.clone())
    }
}

/// Settings as written in the source, before the locale list is deduplicated.
#[derive(Deserialize)]
struct RawSettings {
    locales: Vec<String>,
    #[serde(default)]
    render: RenderConfig,
}

/// Check a raw `serde_json::Value` as if it came from a config source.
///
/// Useful when the data was loaded some other way (a custom source, an
/// embedded default) and only needs checking.
pub fn from_value(value: &serde_json::Value) -> Result<Settings, PolyformConfigError> {
    let raw: RawSettings = serde_json::from_value(value.clone())
        .map_err(|e| PolyformConfigError::Validation(ConfigError::Parse(e.to_string())))?;
    raw.render.validate_locales(&raw.locales)?;
    let settings = Settings {
        locales: LocaleSet::new(raw.locales),
        render: raw.render,
    };
    debug!(locales = settings.locales.len(), "loaded polyform settings");
    Ok(settings)
}

// ---------------------------------------------------------------------------
// config-rs backend
// ---------------------------------------------------------------------------

/// Load and check settings from a [`config::Config`] instance.
///
/// # Errors
///
/// Returns [`PolyformConfigError::Source`] if the config cannot be
/// deserialized into JSON, or [`PolyformConfigError::Validation`] if the
/// settings are unusable.
#[cfg(feature = "config-rs")]
pub fn from_config(config: &config::Config) -> Result<Settings, PolyformConfigError> {
    let value: serde_json::Value = config
        .clone()
        .try_deserialize()
        .map_err(|e| PolyformConfigError::Source(e.to_string()))?;
    from_value(&value)
}

/// Build a [`config::ConfigBuilder`] and load settings from it in one step.
#[cfg(feature = "config-rs")]
pub fn from_builder(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, PolyformConfigError> {
    let config = builder
        .build()
        .map_err(|e| PolyformConfigError::Source(e.to_string()))?;
    from_config(&config)
}

// ---------------------------------------------------------------------------
// figment backend
// ---------------------------------------------------------------------------

/// Load and check settings from a [`figment::Figment`] instance.
///
/// # Example
///
/// ```rust,ignore
/// let figment = figment::Figment::new()
///     .merge(figment::providers::Serialized::defaults(
///         serde_json::json!({"locales": ["en", "nl"]}),
///     ))
///     .merge(figment::providers::Toml::file("forms.toml"));
///
/// let settings = polyform_config::from_figment(&figment).unwrap();
/// ```
#[cfg(feature = "figment")]
pub fn from_figment(figment: &figment::Figment) -> Result<Settings, PolyformConfigError> {
    let value: serde_json::Value = figment
        .extract()
        .map_err(|e| PolyformConfigError::Source(e.to_string()))?;
    from_value(&value)
}

/// Prelude — re-exports everything you need.
pub mod prelude {
    #[cfg(feature = "figment")]
    pub use crate::from_figment;
    pub use crate::{from_value, PolyformConfigError, Settings};
    #[cfg(feature = "config-rs")]
    pub use crate::{from_builder, from_config};
    pub use polyform::prelude::*;
}
