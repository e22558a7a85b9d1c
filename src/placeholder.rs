use serde_json::Value;

/// Substitute `%name` and `%locale` in a modifier argument.
///
/// Strings are rewritten directly. Arrays and object values are walked
/// recursively; object keys and non-string scalars are left untouched.
///
/// ```
/// use polyform::placeholder::substitute;
/// use serde_json::json;
///
/// let arg = json!(["#%name-%locale", {"for": "%name"}, 3]);
/// assert_eq!(
///     substitute(&arg, "title", "nl"),
///     json!(["#title-nl", {"for": "title"}, 3])
/// );
/// ```
pub fn substitute(value: &Value, name: &str, locale: &str) -> Value {
    match value {
        Value::String(s) => Value::String(s.replace("%name", name).replace("%locale", locale)),
        Value::Array(items) => Value::Array(items.iter().map(|v| substitute(v, name, locale)).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), substitute(v, name, locale)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// [`substitute`] over a whole argument list.
pub fn substitute_all(args: &[Value], name: &str, locale: &str) -> Vec<Value> {
    args.iter().map(|v| substitute(v, name, locale)).collect()
}
