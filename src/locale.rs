//! Locales, locale filters and the wire-name convention.
//!
//! A [`LocaleSet`] is fixed when the engine is built. A [`LocaleFilter`]
//! narrows it for a single render call. The [`WireFormat`] decides how a
//! field name and a locale are combined into the `name`/`id` attribute that
//! travels with the submitted form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of locale identifiers.
///
/// # Example
/// ```
/// use polyform::locale::{LocaleFilter, LocaleSet};
///
/// let locales = LocaleSet::new(["en", "nl", "en"]);
/// assert_eq!(locales.as_slice(), ["en", "nl"]);
///
/// let picked = locales.filter(&LocaleFilter::from(["nl", "fr"]));
/// assert_eq!(picked, vec!["nl"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LocaleSet {
    locales: Vec<String>,
}

impl LocaleSet {
    /// Build a set from any iterable of identifiers. Later duplicates are dropped.
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for locale in locales {
            let locale = locale.into();
            if !out.contains(&locale) {
                out.push(locale);
            }
        }
        Self { locales: out }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.locales
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.locales.iter()
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// Working locales for one render pass.
    ///
    /// The result is the intersection of this set with the filter, in the
    /// order of this set. Locales the filter names but the set lacks are
    /// ignored.
    pub fn filter(&self, filter: &LocaleFilter) -> Vec<&str> {
        match filter {
            LocaleFilter::All => self.locales.iter().map(String::as_str).collect(),
            LocaleFilter::Only(wanted) => self
                .locales
                .iter()
                .filter(|l| wanted.iter().any(|w| w == *l))
                .map(String::as_str)
                .collect(),
        }
    }
}

impl From<Vec<String>> for LocaleSet {
    fn from(locales: Vec<String>) -> Self {
        Self::new(locales)
    }
}

impl From<LocaleSet> for Vec<String> {
    fn from(set: LocaleSet) -> Self {
        set.locales
    }
}

impl<'a> IntoIterator for &'a LocaleSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.locales.iter()
    }
}

/// Restriction applied to a single render call.
///
/// A single locale and a one-element list mean the same thing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LocaleFilter {
    /// Every configured locale.
    #[default]
    All,
    /// Only the listed locales that are also configured.
    Only(Vec<String>),
}

impl LocaleFilter {
    /// Build a filter from a JSON value: a string or an array of strings.
    ///
    /// Anything else (numbers, objects, `null`) yields an empty subset.
    pub fn from_value(value: &serde_json::Value) -> Self {
        LocaleFilter::Only(locales_from_value(value))
    }
}

impl From<&str> for LocaleFilter {
    fn from(locale: &str) -> Self {
        LocaleFilter::Only(vec![locale.to_string()])
    }
}

impl From<String> for LocaleFilter {
    fn from(locale: String) -> Self {
        LocaleFilter::Only(vec![locale])
    }
}

impl From<Vec<String>> for LocaleFilter {
    fn from(locales: Vec<String>) -> Self {
        LocaleFilter::Only(locales)
    }
}

impl From<Vec<&str>> for LocaleFilter {
    fn from(locales: Vec<&str>) -> Self {
        LocaleFilter::Only(locales.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for LocaleFilter {
    fn from(locales: &[&str]) -> Self {
        LocaleFilter::Only(locales.iter().map(|l| l.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for LocaleFilter {
    fn from(locales: [&str; N]) -> Self {
        LocaleFilter::Only(locales.iter().map(|l| l.to_string()).collect())
    }
}

/// Read one locale or a list of locales out of a JSON argument.
pub(crate) fn locales_from_value(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => vec![],
    }
}

/// How a field name and a locale are combined into a wire name.
///
/// Both layouts can be decoded back into `(base, locale)` by
/// [`WireFormat::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireFormat {
    /// `base[locale]`, e.g. `title[en]`.
    #[default]
    Suffixed,
    /// `locale[base]`, e.g. `en[title]`.
    Prefixed,
}

impl WireFormat {
    /// Embed `locale` into `base`.
    ///
    /// ```
    /// use polyform::locale::WireFormat;
    ///
    /// assert_eq!(WireFormat::Suffixed.encode("title", "en"), "title[en]");
    /// assert_eq!(WireFormat::Prefixed.encode("title", "en"), "en[title]");
    /// ```
    pub fn encode(self, base: &str, locale: &str) -> String {
        match self {
            WireFormat::Suffixed => format!("{}[{}]", base, locale),
            WireFormat::Prefixed => format!("{}[{}]", locale, base),
        }
    }

    /// Split a wire name into `(base, locale)`.
    ///
    /// The name is cut on every run of `[` and `]`; it only decodes when
    /// exactly two non-empty parts remain. Anything else is not a localized
    /// name and yields `None`.
    pub fn parse(self, wire_name: &str) -> Option<(String, String)> {
        let parts: Vec<&str> = wire_name
            .split(['[', ']'])
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return None;
        }
        let (first, second) = (parts[0].to_string(), parts[1].to_string());
        Some(match self {
            WireFormat::Suffixed => (first, second),
            WireFormat::Prefixed => (second, first),
        })
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireFormat::Suffixed => write!(f, "base[locale]"),
            WireFormat::Prefixed => write!(f, "locale[base]"),
        }
    }
}
