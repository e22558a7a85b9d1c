//! Render configuration shared by every field an engine renders.
//!
//! Keys use the kebab-case names of the published config file:
//!
//! ```json
//! {
//!   "form-group-class": "form-group-translation",
//!   "label-locale-indicator": "%label (%locale)",
//!   "input-locale-attribute": "data-language",
//!   "wire-format": "suffixed"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::{LocaleSet, WireFormat};

pub const DEFAULT_FORM_GROUP_CLASS: &str = "form-group-translation";
pub const DEFAULT_LOCALE_ATTRIBUTE: &str = "data-language";
pub const DEFAULT_LABEL_INDICATOR: &str =
    r#"<span>%label</span><span class="label label-default">%locale</span>"#;

/// Options applied to every localized rendition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderConfig {
    /// Extra class on each locale's form group. `%locale` is substituted.
    pub form_group_class: Option<String>,
    /// Attribute stamped with the locale on each rendered input.
    #[serde(rename = "input-locale-attribute")]
    pub locale_attribute: Option<String>,
    /// Label template with `%label` and `%locale` placeholders.
    #[serde(rename = "label-locale-indicator")]
    pub label_indicator: String,
    /// Layout of localized wire names.
    pub wire_format: WireFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            form_group_class: Some(DEFAULT_FORM_GROUP_CLASS.to_string()),
            locale_attribute: Some(DEFAULT_LOCALE_ATTRIBUTE.to_string()),
            label_indicator: DEFAULT_LABEL_INDICATOR.to_string(),
            wire_format: WireFormat::default(),
        }
    }
}

impl RenderConfig {
    /// No group class, no locale attribute, bare `%label` indicator.
    pub fn minimal() -> Self {
        Self {
            form_group_class: None,
            locale_attribute: None,
            label_indicator: "%label".to_string(),
            wire_format: WireFormat::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_value(value: &serde_json::Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value.clone()).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn form_group_class(mut self, class: impl Into<String>) -> Self {
        self.form_group_class = Some(class.into());
        self
    }

    pub fn without_form_group_class(mut self) -> Self {
        self.form_group_class = None;
        self
    }

    pub fn locale_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.locale_attribute = Some(attribute.into());
        self
    }

    pub fn without_locale_attribute(mut self) -> Self {
        self.locale_attribute = None;
        self
    }

    pub fn label_indicator(mut self, template: impl Into<String>) -> Self {
        self.label_indicator = template.into();
        self
    }

    pub fn wire_format(mut self, format: WireFormat) -> Self {
        self.wire_format = format;
        self
    }

    /// Group class, treating an empty string as unset.
    pub fn group_class(&self) -> Option<&str> {
        self.form_group_class.as_deref().filter(|c| !c.is_empty())
    }

    /// Locale attribute name, treating an empty string as unset.
    pub fn attribute(&self) -> Option<&str> {
        self.locale_attribute.as_deref().filter(|a| !a.is_empty())
    }

    /// Label for one locale: `%label` then `%locale` are substituted.
    pub fn decorate_label(&self, label: &str, locale: &str) -> String {
        self.label_indicator
            .replace("%label", label)
            .replace("%locale", locale)
    }

    /// Check this configuration against the locales it will be used with.
    pub fn validate(&self, locales: &LocaleSet) -> Result<(), ConfigError> {
        self.validate_locales(locales.as_slice())
    }

    /// Like [`validate`](Self::validate), over a locale list as written in a
    /// config source. Repeated locales are reported.
    pub fn validate_locales(&self, locales: &[String]) -> Result<(), ConfigError> {
        let mut problems = Vec::new();
        if locales.is_empty() {
            problems.push("at least one locale is required".to_string());
        }
        for (i, locale) in locales.iter().enumerate() {
            if locale.is_empty() || locale.contains(['[', ']']) {
                problems.push(format!("locale {:?} cannot be embedded in a wire name", locale));
            }
            if locales[..i].contains(locale) {
                problems.push(format!("locale {:?} is listed more than once", locale));
            }
        }
        if !self.label_indicator.contains("%label") {
            problems.push("label-locale-indicator must contain %label".to_string());
        }
        if let Some(attr) = self.attribute() {
            if attr.contains(char::is_whitespace) {
                problems.push(format!("input-locale-attribute {:?} is not an attribute name", attr));
            }
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }
}
