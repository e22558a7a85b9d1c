//! Locale-aware lookup of bound values.
//!
//! An element factory that populates inputs from a bound record asks the
//! [`ValueResolver`] for each field's value. Localized wire names such as
//! `title[nl]` read the `nl` translation of `title`; every other name reads
//! the plain attribute.

use serde_json::{Map, Value};
use tracing::trace;

use crate::locale::{LocaleSet, WireFormat};

/// A record the form is bound to.
pub trait BoundData {
    /// Plain attribute value, `None` when the record has no such attribute.
    fn get(&self, name: &str) -> Option<Value>;

    /// Stored translation of `name` in `locale`, `None` when missing.
    fn translation(&self, name: &str, locale: &str) -> Option<Value>;
}

/// [`BoundData`] over a JSON object.
///
/// Translatable attributes are objects keyed by locale:
///
/// ```
/// use polyform::binding::{BoundData, JsonRecord};
/// use serde_json::json;
///
/// let record = JsonRecord::new(json!({
///     "slug": "home",
///     "title": {"en": "Home", "nl": "Thuis"}
/// }));
/// assert_eq!(record.get("slug"), Some(json!("home")));
/// assert_eq!(record.translation("title", "nl"), Some(json!("Thuis")));
/// assert_eq!(record.translation("title", "fr"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonRecord {
    attributes: Map<String, Value>,
}

impl JsonRecord {
    /// Wrap a JSON value. Anything but an object becomes an empty record.
    pub fn new(value: Value) -> Self {
        match value {
            Value::Object(attributes) => Self { attributes },
            _ => Self::default(),
        }
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }
}

impl BoundData for JsonRecord {
    fn get(&self, name: &str) -> Option<Value> {
        self.attributes.get(name).cloned()
    }

    fn translation(&self, name: &str, locale: &str) -> Option<Value> {
        self.attributes
            .get(name)
            .and_then(|v| v.get(locale))
            .filter(|v| !v.is_null())
            .cloned()
    }
}

/// Resolves a field's bound value from its wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueResolver {
    locales: LocaleSet,
    wire_format: WireFormat,
}

impl ValueResolver {
    pub fn new(locales: LocaleSet, wire_format: WireFormat) -> Self {
        Self {
            locales,
            wire_format,
        }
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn wire_format(&self) -> WireFormat {
        self.wire_format
    }

    /// Decompose a wire name into `(base, locale)` when the locale is active.
    pub fn localized(&self, name: &str) -> Option<(String, String)> {
        self.wire_format
            .parse(name)
            .filter(|(_, locale)| self.locales.contains(locale))
    }

    /// Value for the field called `name`.
    ///
    /// - Localized name with an active locale: the translation, or `""` when
    ///   there is none. `default` is never used for these.
    /// - Any other name: the plain attribute, falling back to `default`.
    /// - No bound data: `default`.
    pub fn resolve(&self, data: Option<&dyn BoundData>, name: &str, default: Value) -> Value {
        let Some(data) = data else {
            return default;
        };
        match self.localized(name) {
            Some((base, locale)) => {
                trace!(name, base = %base, locale = %locale, "resolving translated value");
                data.translation(&base, &locale)
                    .filter(is_present)
                    .unwrap_or_else(|| Value::String(String::new()))
            }
            None => data.get(name).unwrap_or(default),
        }
    }
}

/// Empty strings and `false` count as missing translations.
fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
        && value.as_str().map_or(true, |s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolver() -> ValueResolver {
        ValueResolver::new(LocaleSet::new(["en", "nl"]), WireFormat::Suffixed)
    }

    #[test]
    fn inactive_locale_falls_back_to_plain_lookup() {
        let record = JsonRecord::new(json!({"title[fr]": "plain"}));
        assert_eq!(resolver().resolve(Some(&record), "title[fr]", json!("D")), json!("plain"));
    }

    #[test]
    fn prefixed_names_decode_in_reverse() {
        let resolver = ValueResolver::new(LocaleSet::new(["en"]), WireFormat::Prefixed);
        let record = JsonRecord::new(json!({"title": {"en": "Hello"}}));
        assert_eq!(resolver.resolve(Some(&record), "en[title]", json!("D")), json!("Hello"));
    }

    #[test]
    fn zero_translations_are_kept() {
        let record = JsonRecord::new(json!({"count": {"en": "0", "nl": 0}}));
        assert_eq!(resolver().resolve(Some(&record), "count[en]", json!("D")), json!("0"));
        assert_eq!(resolver().resolve(Some(&record), "count[nl]", json!("D")), json!(0));
    }

    #[test]
    fn empty_translation_becomes_empty_string() {
        let record = JsonRecord::new(json!({"title": {"en": ""}}));
        assert_eq!(resolver().resolve(Some(&record), "title[en]", json!("D")), json!(""));
    }
}
