use serde_json::Value;

use crate::behavior::{Behavior, BehaviorTable};

/// Ordered name → value mapping of an element's constructor arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    entries: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Overwrite a value in place, or append it when the name is new.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Values in slot order, as handed to the element factory.
    pub fn positional(&self) -> Vec<Value> {
        self.entries.iter().map(|(_, v)| v.clone()).collect()
    }

    /// String view of a text argument.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(value_to_text)
    }
}

/// Render a scalar JSON value the way it would appear in markup.
pub(crate) fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Locales a modifier is restricted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleScope(Vec<String>);

impl LocaleScope {
    pub fn new<I, S>(locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(locales.into_iter().map(Into::into).collect())
    }

    /// Scope read from a JSON argument: one locale or a list of locales.
    pub fn from_value(value: &Value) -> Self {
        Self(crate::locale::locales_from_value(value))
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.0.iter().any(|l| l == locale)
    }

    pub fn locales(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for LocaleScope {
    fn from(locale: &str) -> Self {
        Self(vec![locale.to_string()])
    }
}

impl From<Vec<&str>> for LocaleScope {
    fn from(locales: Vec<&str>) -> Self {
        Self::new(locales)
    }
}

impl<const N: usize> From<[&str; N]> for LocaleScope {
    fn from(locales: [&str; N]) -> Self {
        Self::new(locales)
    }
}

/// A recorded call to apply to the element after it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub name: String,
    pub arguments: Vec<Value>,
    /// `None` applies to every rendition.
    pub scope: Option<LocaleScope>,
}

impl Modifier {
    pub fn new(name: impl Into<String>, arguments: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
            scope: None,
        }
    }

    pub fn scoped(name: impl Into<String>, scope: LocaleScope, arguments: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
            scope: Some(scope),
        }
    }

    /// Whether this modifier runs for the rendition of `locale`.
    ///
    /// Without a locale (non-cloned elements) every modifier applies.
    pub fn applies_to(&self, locale: Option<&str>) -> bool {
        match (&self.scope, locale) {
            (Some(scope), Some(locale)) => scope.contains(locale),
            _ => true,
        }
    }
}

/// The field request being assembled between `field()` and `render()`.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingField {
    pub element_type: String,
    pub arguments: Arguments,
    pub modifiers: Vec<Modifier>,
}

impl PendingField {
    pub fn new(element_type: impl Into<String>, arguments: Arguments) -> Self {
        Self {
            element_type: element_type.into(),
            arguments,
            modifiers: vec![],
        }
    }

    /// Resolve the fanout flags of this field's type.
    pub fn behavior<'a>(&self, table: &'a BehaviorTable) -> &'a Behavior {
        table.classify(&self.element_type)
    }

    pub fn push(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }
}
