/// A single HTML tag with ordered attributes.
///
/// Attribute order is insertion order; overwriting keeps the original
/// position. `content == None` renders an open tag without a closing one
/// (void elements, `<form>` openers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: Vec<(String, String)>,
    content: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: vec![],
            content: None,
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Raw (unescaped) inner HTML.
    pub fn html(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Escaped inner text.
    pub fn text(self, content: &str) -> Self {
        self.html(escape(content))
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    /// Set only when the attribute is absent.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        if self.get(key).is_none() {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn add_class(&mut self, class: &str) {
        match self.attributes.iter_mut().find(|(k, _)| k == "class") {
            Some((_, classes)) => {
                if !classes.split_whitespace().any(|c| c == class) {
                    if !classes.is_empty() {
                        classes.push(' ');
                    }
                    classes.push_str(class);
                }
            }
            None => self.attributes.push(("class".into(), class.into())),
        }
    }

    pub fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    pub fn render(&self) -> String {
        let mut out = format!("<{}", self.name);
        for (key, value) in &self.attributes {
            out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
        }
        out.push('>');
        if let Some(content) = &self.content {
            out.push_str(content);
            out.push_str(&format!("</{}>", self.name));
        }
        out
    }
}

/// Escape text for use in attributes and element content.
pub fn escape(raw: &str) -> String {
    v_htmlescape::escape(raw).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut tag = Tag::new("input").attr("type", "text").attr("name", "a").attr("id", "a");
        tag.set("name", "b");
        assert_eq!(tag.render(), r#"<input type="text" name="b" id="a">"#);
    }

    #[test]
    fn classes_are_not_duplicated() {
        let mut tag = Tag::new("div").attr("class", "mb-3");
        tag.add_class("x");
        tag.add_class("x");
        assert_eq!(tag.get("class"), Some("mb-3 x"));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let tag = Tag::new("input").attr("placeholder", r#"a "b" & <c>"#);
        assert_eq!(
            tag.render(),
            r#"<input placeholder="a &quot;b&quot; &amp; &lt;c&gt;">"#
        );
    }

    #[test]
    fn content_closes_the_tag() {
        assert_eq!(Tag::new("p").text("a<b").render(), "<p>a&lt;b</p>");
    }
}
