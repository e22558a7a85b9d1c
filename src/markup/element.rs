use serde_json::Value;

use super::tag::Tag;
use super::MarkupError;
use crate::factory::Element;
use crate::field::value_to_text;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Body {
    /// Control wrapped in a form group together with its label.
    Group {
        group: Tag,
        label: Tag,
        control: Tag,
        label_after: bool,
        help: Option<String>,
    },
    /// A lone tag (hidden inputs, buttons, form openers).
    Single(Tag),
    /// Fixed markup that accepts no modifiers.
    Raw(String),
}

/// Element produced by [`HtmlFactory`](super::HtmlFactory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    kind: String,
    body: Body,
}

impl HtmlElement {
    pub(crate) fn group(kind: &str, group: Tag, label: Tag, control: Tag, label_after: bool) -> Self {
        Self {
            kind: kind.to_string(),
            body: Body::Group {
                group,
                label,
                control,
                label_after,
                help: None,
            },
        }
    }

    pub(crate) fn single(kind: &str, tag: Tag) -> Self {
        Self {
            kind: kind.to_string(),
            body: Body::Single(tag),
        }
    }

    pub(crate) fn raw(kind: &str, html: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            body: Body::Raw(html.into()),
        }
    }

    /// Element type this was created as.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The tag modifiers target: the control of a group, or the lone tag.
    pub fn control(&self) -> Option<&Tag> {
        match &self.body {
            Body::Group { control, .. } => Some(control),
            Body::Single(tag) => Some(tag),
            Body::Raw(_) => None,
        }
    }

    fn control_mut(&mut self, method: &str) -> Result<&mut Tag, MarkupError> {
        match &mut self.body {
            Body::Group { control, .. } => Ok(control),
            Body::Single(tag) => Ok(tag),
            Body::Raw(_) => Err(MarkupError::UnknownMethod {
                element: self.kind.clone(),
                method: method.to_string(),
            }),
        }
    }

    fn label_mut(&mut self) -> Option<&mut Tag> {
        match &mut self.body {
            Body::Group { label, .. } => Some(label),
            _ => None,
        }
    }
}

fn arg(method: &str, args: &[Value], position: usize) -> Result<String, MarkupError> {
    args.get(position)
        .map(value_to_text)
        .ok_or_else(|| MarkupError::MissingArgument {
            method: method.to_string(),
            position,
        })
}

impl Element for HtmlElement {
    type Error = MarkupError;

    fn apply(&mut self, method: &str, args: &[Value]) -> Result<(), MarkupError> {
        match method {
            "attribute" => {
                let (key, value) = (arg(method, args, 0)?, arg(method, args, 1)?);
                self.control_mut(method)?.set(key, value);
            }
            "data" => {
                let (key, value) = (arg(method, args, 0)?, arg(method, args, 1)?);
                self.control_mut(method)?.set(format!("data-{}", key), value);
            }
            "required" => {
                self.control_mut(method)?.set("required", "required");
                if let Some(label) = self.label_mut() {
                    label.add_class("form-label-required");
                }
            }
            "disable" | "disabled" => self.control_mut(method)?.set("disabled", "disabled"),
            "readonly" => self.control_mut(method)?.set("readonly", "readonly"),
            "id" => {
                let id = arg(method, args, 0)?;
                self.control_mut(method)?.set("id", id.clone());
                if let Some(label) = self.label_mut() {
                    label.set("for", id);
                }
            }
            "placeholder" | "value" => {
                let value = arg(method, args, 0)?;
                self.control_mut(method)?.set(method, value);
            }
            "defaultValue" => {
                let value = arg(method, args, 0)?;
                self.control_mut(method)?.set_default("value", value);
            }
            "addClass" => {
                let class = arg(method, args, 0)?;
                self.control_mut(method)?.add_class(&class);
            }
            "labelClass" => {
                let class = arg(method, args, 0)?;
                if let Some(label) = self.label_mut() {
                    label.add_class(&class);
                }
            }
            "addGroupClass" => {
                let class = arg(method, args, 0)?;
                if let Body::Group { group, .. } = &mut self.body {
                    group.add_class(&class);
                }
            }
            "helpBlock" => {
                let text = arg(method, args, 0)?;
                match &mut self.body {
                    Body::Group { help, .. } => *help = Some(text),
                    _ => {
                        return Err(MarkupError::UnknownMethod {
                            element: self.kind.clone(),
                            method: method.to_string(),
                        })
                    }
                }
            }
            _ => {
                return Err(MarkupError::UnknownMethod {
                    element: self.kind.clone(),
                    method: method.to_string(),
                })
            }
        }
        Ok(())
    }

    fn render(&self) -> String {
        match &self.body {
            Body::Group {
                group,
                label,
                control,
                label_after,
                help,
            } => {
                let mut inner = if *label_after {
                    control.render() + &label.render()
                } else {
                    label.render() + &control.render()
                };
                if let Some(help) = help {
                    inner.push_str(&Tag::new("div").attr("class", "form-text").text(help).render());
                }
                let mut group = group.clone();
                group.set_content(Some(inner));
                group.render()
            }
            Body::Single(tag) => tag.render(),
            Body::Raw(html) => html.clone(),
        }
    }
}

impl std::fmt::Display for HtmlElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Element::render(self))
    }
}
