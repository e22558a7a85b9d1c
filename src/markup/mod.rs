//! Reference [`ElementFactory`] producing Bootstrap-flavoured HTML.
//!
//! Enough of a form builder to drive the engine end to end: form groups with
//! labels, the usual inputs, selects, checkboxes, buttons and form
//! open/close tags. Values are populated from a bound record through a
//! [`ValueResolver`], so localized fields read their translations.

mod element;
mod tag;

pub use element::HtmlElement;
pub use tag::{escape, Tag};

use std::fmt;

use serde_json::Value;

use crate::binding::{BoundData, JsonRecord, ValueResolver};
use crate::factory::ElementFactory;
use crate::field::value_to_text;
use crate::locale::{LocaleSet, WireFormat};

/// Errors raised by [`HtmlFactory`] and [`HtmlElement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// No such element type.
    UnknownElement(String),
    /// The element does not support this method.
    UnknownMethod { element: String, method: String },
    /// A required positional argument was not supplied.
    MissingArgument { method: String, position: usize },
}

impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupError::UnknownElement(ty) => write!(f, "unknown element type `{}`", ty),
            MarkupError::UnknownMethod { element, method } => {
                write!(f, "`{}` elements do not support `{}`", element, method)
            }
            MarkupError::MissingArgument { method, position } => {
                write!(f, "`{}` is missing argument #{}", method, position)
            }
        }
    }
}

impl std::error::Error for MarkupError {}

/// Builds [`HtmlElement`]s and keeps the bound record between calls.
pub struct HtmlFactory {
    resolver: ValueResolver,
    bound: Option<Box<dyn BoundData + Send>>,
}

impl Default for HtmlFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlFactory {
    /// Factory without localized value lookup until an engine configures it.
    pub fn new() -> Self {
        Self::with_resolver(ValueResolver::default())
    }

    /// Factory that resolves `locales` in wire names of the given layout.
    pub fn for_locales(locales: LocaleSet, wire_format: WireFormat) -> Self {
        Self::with_resolver(ValueResolver::new(locales, wire_format))
    }

    pub fn with_resolver(resolver: ValueResolver) -> Self {
        Self {
            resolver,
            bound: None,
        }
    }

    pub fn resolver(&self) -> &ValueResolver {
        &self.resolver
    }

    /// Populate subsequent fields from `data`.
    pub fn bind(&mut self, data: impl BoundData + Send + 'static) {
        self.bound = Some(Box::new(data));
    }

    pub fn unbind(&mut self) {
        self.bound = None;
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    /// Bound value for `name`, `Value::Null` when there is none.
    pub fn bound_value(&self, name: &str) -> Value {
        let data = self.bound.as_deref().map(|d| d as &dyn BoundData);
        self.resolver.resolve(data, name, Value::Null)
    }

    /// Explicit argument if given, bound value otherwise.
    fn value_for(&self, name: &str, explicit: Option<&Value>) -> Option<String> {
        let value = match explicit {
            Some(v) if !v.is_null() => v.clone(),
            _ => self.bound_value(name),
        };
        let text = value_to_text(&value);
        (!text.is_empty()).then_some(text)
    }

    fn input(&self, ty: &str, args: &[Value]) -> HtmlElement {
        let label = text_arg(args, 0);
        let name = text_arg(args, 1);
        let input_type = if ty == "inputGroup" { "text" } else { ty };
        let mut control = Tag::new("input")
            .attr("type", input_type)
            .attr("name", name.clone());
        if !matches!(ty, "password" | "file") {
            if let Some(value) = self.value_for(&name, args.get(2)) {
                control.set("value", value);
            }
        }
        control.set("class", "form-control");
        control.set("id", name.clone());
        HtmlElement::group(ty, form_group("mb-3"), form_label(&name, &label), control, false)
    }

    fn textarea(&self, args: &[Value]) -> HtmlElement {
        let label = text_arg(args, 0);
        let name = text_arg(args, 1);
        let content = self.value_for(&name, None).unwrap_or_default();
        let control = Tag::new("textarea")
            .attr("name", name.clone())
            .attr("class", "form-control")
            .attr("id", name.clone())
            .text(&content);
        HtmlElement::group("textarea", form_group("mb-3"), form_label(&name, &label), control, false)
    }

    fn select(&self, args: &[Value]) -> HtmlElement {
        let label = text_arg(args, 0);
        let name = text_arg(args, 1);
        let selected = self.value_for(&name, None);
        let mut options = String::new();
        for (value, text) in options_of(args.get(2)) {
            let mut option = Tag::new("option").attr("value", value.clone());
            if selected.as_deref() == Some(value.as_str()) {
                option.set("selected", "selected");
            }
            options.push_str(&option.text(&text).render());
        }
        let control = Tag::new("select")
            .attr("name", name.clone())
            .attr("class", "form-select")
            .attr("id", name.clone())
            .html(options);
        HtmlElement::group("select", form_group("mb-3"), form_label(&name, &label), control, false)
    }

    fn check(&self, ty: &str, args: &[Value]) -> HtmlElement {
        let label = text_arg(args, 0);
        let name = text_arg(args, 1);
        let input_type = if ty.ends_with("adio") { "radio" } else { "checkbox" };
        let value = args.get(2).map(value_to_text).unwrap_or_else(|| "1".to_string());
        let mut control = Tag::new("input")
            .attr("type", input_type)
            .attr("name", name.clone())
            .attr("value", value.clone())
            .attr("class", "form-check-input")
            .attr("id", name.clone());
        let current = self.bound_value(&name);
        let checked = match input_type {
            "radio" => value_to_text(&current) == value,
            _ => matches!(current, Value::Bool(true)) || value_to_text(&current) == value,
        };
        if checked {
            control.set("checked", "checked");
        }
        let label = Tag::new("label")
            .attr("for", name)
            .attr("class", "form-check-label")
            .html(label);
        let group_class = if ty.starts_with("inline") {
            "form-check form-check-inline"
        } else {
            "form-check"
        };
        HtmlElement::group(ty, form_group(group_class), label, control, true)
    }

    fn hidden(&self, args: &[Value]) -> HtmlElement {
        let name = text_arg(args, 0);
        let mut tag = Tag::new("input").attr("type", "hidden").attr("name", name.clone());
        if let Some(value) = self.value_for(&name, None) {
            tag.set("value", value);
        }
        HtmlElement::single("hidden", tag)
    }
}

impl ElementFactory for HtmlFactory {
    type Element = HtmlElement;
    type Error = MarkupError;

    fn create(&mut self, element_type: &str, args: &[Value]) -> Result<Option<HtmlElement>, MarkupError> {
        let element = match element_type {
            "text" | "email" | "password" | "date" | "file" | "inputGroup" => {
                self.input(element_type, args)
            }
            "textarea" => self.textarea(args),
            "select" => self.select(args),
            "checkbox" | "inlineCheckbox" | "radio" | "inlineRadio" => self.check(element_type, args),
            "hidden" => self.hidden(args),
            "submit" => {
                let value = args.get(0).map(value_to_text).unwrap_or_else(|| "Submit".into());
                let style = args.get(1).map(value_to_text).unwrap_or_else(|| "btn-primary".into());
                let tag = Tag::new("button")
                    .attr("type", "submit")
                    .attr("class", format!("btn {}", style))
                    .text(&value);
                HtmlElement::single("submit", tag)
            }
            "button" => {
                let label = text_arg(args, 0);
                let style = args.get(2).map(value_to_text).unwrap_or_else(|| "btn-secondary".into());
                let mut tag = Tag::new("button").attr("type", "button");
                if let Some(name) = args.get(1) {
                    tag.set("name", value_to_text(name));
                }
                tag.set("class", format!("btn {}", style));
                HtmlElement::single("button", tag.text(&label))
            }
            "label" => HtmlElement::single("label", Tag::new("label").html(text_arg(args, 0))),
            "open" => HtmlElement::single("open", form_opener()),
            "openHorizontal" => {
                let mut tag = form_opener();
                tag.add_class("form-horizontal");
                HtmlElement::single("openHorizontal", tag)
            }
            "close" => {
                self.unbind();
                HtmlElement::raw("close", "</form>")
            }
            "bind" => {
                let model = args.get(0).cloned().unwrap_or(Value::Null);
                self.bind(JsonRecord::new(model));
                return Ok(None);
            }
            other => return Err(MarkupError::UnknownElement(other.to_string())),
        };
        Ok(Some(element))
    }

    fn configure(&mut self, locales: &LocaleSet, wire_format: WireFormat) {
        self.resolver = ValueResolver::new(locales.clone(), wire_format);
    }
}

fn text_arg(args: &[Value], position: usize) -> String {
    args.get(position).map(value_to_text).unwrap_or_default()
}

fn form_group(class: &str) -> Tag {
    Tag::new("div").attr("class", class)
}

fn form_label(name: &str, label: &str) -> Tag {
    Tag::new("label")
        .attr("for", name)
        .attr("class", "form-label")
        .html(label)
}

fn form_opener() -> Tag {
    Tag::new("form").attr("method", "POST").attr("action", "")
}

/// `{value: text}` objects or `[text, ...]` arrays (value = text).
fn options_of(options: Option<&Value>) -> Vec<(String, String)> {
    match options {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), value_to_text(v)))
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| (value_to_text(v), value_to_text(v)))
            .collect(),
        _ => vec![],
    }
}
