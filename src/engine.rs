//! The fanout engine: records one field request, then renders it once per
//! locale through an [`ElementFactory`].
//!
//! Two ways to drive it:
//!
//! - the typed builder: [`field`](FanoutEngine::field),
//!   [`modifier`](FanoutEngine::modifier),
//!   [`modifier_for_locale`](FanoutEngine::modifier_for_locale), then
//!   [`render`](FanoutEngine::render) or
//!   [`render_locale`](FanoutEngine::render_locale);
//! - [`invoke`](FanoutEngine::invoke), which interprets method names the way
//!   a template host calls them (`text`, `labelClass`, `requiredForLocale`,
//!   `bind`, ...).
//!
//! Exactly one field is in flight per engine. Every render consumes it, even
//! when the factory fails halfway.

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::behavior::BehaviorTable;
use crate::config::RenderConfig;
use crate::factory::{Element, ElementFactory};
use crate::field::{Arguments, LocaleScope, Modifier, PendingField};
use crate::locale::{LocaleFilter, LocaleSet};
use crate::placeholder::substitute_all;

/// Suffix marking a method name as locale-scoped, e.g. `dataForLocale`.
pub const LOCALE_SCOPE_SUFFIX: &str = "ForLocale";

/// Method names that render immediately when invoked.
pub const TERMINAL_METHODS: [&str; 2] = ["bind", "close"];

/// Modifier appended to add the configured class to a rendition's group.
pub const GROUP_CLASS_METHOD: &str = "addGroupClass";

/// Modifier appended to stamp the locale attribute on a rendition.
pub const ATTRIBUTE_METHOD: &str = "attribute";

/// Outcome of [`FanoutEngine::invoke`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// The call was recorded; keep chaining.
    Pending,
    /// A terminal method ran the render pass.
    Rendered(String),
}

impl Invocation {
    pub fn into_rendered(self) -> Option<String> {
        match self {
            Invocation::Pending => None,
            Invocation::Rendered(out) => Some(out),
        }
    }
}

/// One recorded step for [`FanoutEngine::run`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a field of the given type.
    Field { element_type: String, args: Vec<Value> },
    /// Record a modifier on the open field.
    Modifier(Modifier),
    /// Interpret a method name, as [`FanoutEngine::invoke`] does.
    Invoke { method: String, args: Vec<Value> },
    /// Render the open field for the filtered locales.
    Render(LocaleFilter),
}

/// Renders declarative field requests once per configured locale.
///
/// # Example
/// ```
/// use polyform::prelude::*;
/// use serde_json::json;
///
/// let config = RenderConfig::minimal().label_indicator("%label (%locale)");
/// let mut form = FanoutEngine::new(HtmlFactory::new(), LocaleSet::new(["en", "nl"]))
///     .with_config(config);
///
/// let html = form
///     .field("text", vec![json!("Title"), json!("title")])
///     .render()
///     .unwrap();
/// assert!(html.contains(r#"name="title[en]""#));
/// assert!(html.contains("Title (nl)"));
/// ```
pub struct FanoutEngine<F> {
    factory: F,
    locales: LocaleSet,
    config: RenderConfig,
    behaviors: BehaviorTable,
    pending: Option<PendingField>,
}

impl<F: ElementFactory> FanoutEngine<F> {
    /// Engine with the default [`RenderConfig`] and [`BehaviorTable`].
    pub fn new(mut factory: F, locales: LocaleSet) -> Self {
        let config = RenderConfig::default();
        factory.configure(&locales, config.wire_format);
        Self {
            factory,
            locales,
            config,
            behaviors: BehaviorTable::default(),
            pending: None,
        }
    }

    /// Replace the render options. The factory is reconfigured with the new
    /// wire format.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.factory.configure(&self.locales, config.wire_format);
        self.config = config;
        self
    }

    pub fn with_behaviors(mut self, behaviors: BehaviorTable) -> Self {
        self.behaviors = behaviors;
        self
    }

    pub fn locales(&self) -> &LocaleSet {
        &self.locales
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn behaviors(&self) -> &BehaviorTable {
        &self.behaviors
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    pub fn into_factory(self) -> F {
        self.factory
    }

    pub fn pending(&self) -> Option<&PendingField> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the open field without rendering it.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Open a field. Positional `args` are named after the type's slots.
    ///
    /// A field still open from an earlier call is discarded.
    pub fn field(&mut self, element_type: &str, args: Vec<Value>) -> &mut Self {
        if let Some(stale) = self.pending.take() {
            warn!(
                stale = %stale.element_type,
                element_type,
                "discarding unrendered field"
            );
        }
        let arguments = self.behaviors.map_arguments(element_type, args);
        self.pending = Some(PendingField::new(element_type, arguments));
        self
    }

    /// Record a modifier for every rendition of the open field.
    pub fn modifier(&mut self, name: &str, args: Vec<Value>) -> &mut Self {
        self.push_modifier(Modifier::new(name, args))
    }

    /// Record a modifier applied only to renditions whose locale is in `scope`.
    pub fn modifier_for_locale(
        &mut self,
        name: &str,
        scope: impl Into<LocaleScope>,
        args: Vec<Value>,
    ) -> &mut Self {
        self.push_modifier(Modifier::scoped(name, scope.into(), args))
    }

    fn push_modifier(&mut self, modifier: Modifier) -> &mut Self {
        match self.pending.as_mut() {
            Some(field) => field.push(modifier),
            None => warn!(modifier = %modifier.name, "modifier without an open field ignored"),
        }
        self
    }

    /// Render the open field for every configured locale.
    pub fn render(&mut self) -> Result<String, F::Error> {
        self.render_locale(LocaleFilter::All)
    }

    /// Render the open field for the configured locales named by `filter`.
    ///
    /// With nothing open, renders nothing.
    pub fn render_locale(&mut self, filter: impl Into<LocaleFilter>) -> Result<String, F::Error> {
        let Some(field) = self.pending.take() else {
            return Ok(String::new());
        };
        let filter = filter.into();
        let Self {
            factory,
            locales,
            config,
            behaviors,
            ..
        } = self;
        let behavior = field.behavior(behaviors);

        if !behavior.fanout {
            debug!(element_type = %field.element_type, "rendering single element");
            return build(factory, &field, &field.arguments, &[], None);
        }

        let targets = locales.filter(&filter);
        debug!(
            element_type = %field.element_type,
            locales = targets.len(),
            "rendering localized element"
        );

        let name = field.arguments.text("name");
        let label = field.arguments.text("label");
        let mut out = String::new();
        for locale in targets {
            let mut arguments = field.arguments.clone();
            if let Some(name) = &name {
                arguments.set("name", Value::String(config.wire_format.encode(name, locale)));
            }
            if behavior.indicator {
                if let Some(label) = &label {
                    arguments.set("label", Value::String(config.decorate_label(label, locale)));
                }
            }

            let mut extra = Vec::new();
            if let Some(class) = config.group_class() {
                extra.push(Modifier::new(
                    GROUP_CLASS_METHOD,
                    vec![Value::String(class.replace("%locale", locale))],
                ));
            }
            if let Some(attribute) = config.attribute() {
                extra.push(Modifier::new(
                    ATTRIBUTE_METHOD,
                    vec![Value::String(attribute.to_string()), Value::String(locale.to_string())],
                ));
            }

            out.push_str(&build(factory, &field, &arguments, &extra, Some(locale))?);
        }
        Ok(out)
    }

    /// Interpret a method call by name.
    ///
    /// With no field open, `method` is an element type and `args` are its
    /// positional arguments. Otherwise `method` is a modifier; a name ending
    /// in [`LOCALE_SCOPE_SUFFIX`] takes its locale scope (one locale or a
    /// list) from the first argument. [`TERMINAL_METHODS`] render at once.
    ///
    /// ```
    /// use polyform::prelude::*;
    /// use serde_json::json;
    ///
    /// let mut form = FanoutEngine::new(HtmlFactory::new(), LocaleSet::new(["en", "nl"]));
    /// form.invoke("text", vec![json!("Title"), json!("title")]).unwrap();
    /// form.invoke("requiredForLocale", vec![json!("en")]).unwrap();
    /// assert_eq!(form.pending().unwrap().modifiers[0].name, "required");
    /// form.render().unwrap();
    ///
    /// let out = form.invoke("close", vec![]).unwrap();
    /// assert_eq!(out, Invocation::Rendered("</form>".to_string()));
    /// ```
    pub fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Invocation, F::Error> {
        match self.pending.as_mut() {
            None => {
                let arguments = self.behaviors.map_arguments(method, args);
                self.pending = Some(PendingField::new(method, arguments));
            }
            Some(field) => field.push(parse_modifier(method, args)),
        }

        if TERMINAL_METHODS.contains(&method) {
            return self.render().map(Invocation::Rendered);
        }
        Ok(Invocation::Pending)
    }

    /// Execute a command list, concatenating everything rendered along the way.
    pub fn run<I>(&mut self, commands: I) -> Result<String, F::Error>
    where
        I: IntoIterator<Item = Command>,
    {
        let mut out = String::new();
        for command in commands {
            match command {
                Command::Field { element_type, args } => {
                    self.field(&element_type, args);
                }
                Command::Modifier(modifier) => {
                    self.push_modifier(modifier);
                }
                Command::Invoke { method, args } => {
                    if let Invocation::Rendered(rendered) = self.invoke(&method, args)? {
                        out.push_str(&rendered);
                    }
                }
                Command::Render(filter) => out.push_str(&self.render_locale(filter)?),
            }
        }
        Ok(out)
    }
}

/// Split a dynamic method name into a modifier, honoring the scope suffix.
fn parse_modifier(method: &str, args: Vec<Value>) -> Modifier {
    match method.strip_suffix(LOCALE_SCOPE_SUFFIX) {
        Some(name) if !name.is_empty() => {
            let mut args = args.into_iter();
            let scope = args
                .next()
                .map(|v| LocaleScope::from_value(&v))
                .unwrap_or_else(|| LocaleScope::new(Vec::<String>::new()));
            Modifier::scoped(name, scope, args.collect())
        }
        _ => Modifier::new(method, args),
    }
}

/// Create one element and apply the field's modifiers, then `extra`.
fn build<F: ElementFactory>(
    factory: &mut F,
    field: &PendingField,
    arguments: &Arguments,
    extra: &[Modifier],
    locale: Option<&str>,
) -> Result<String, F::Error> {
    let Some(mut element) = factory.create(&field.element_type, &arguments.positional())? else {
        return Ok(String::new());
    };

    let name = field.arguments.text("name").unwrap_or_default();
    let locale_text = locale.unwrap_or("");
    for modifier in field.modifiers.iter().chain(extra) {
        if !modifier.applies_to(locale) {
            trace!(modifier = %modifier.name, locale = locale_text, "skipping locale-scoped modifier");
            continue;
        }
        let args = substitute_all(&modifier.arguments, &name, locale_text);
        element.apply(&modifier.name, &args)?;
    }
    Ok(element.render())
}
