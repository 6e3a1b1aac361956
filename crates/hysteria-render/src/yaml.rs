//! YAML scalar formatting for template interpolation.

use std::borrow::Cow;

/// Double-quoted scalar. JSON string syntax is a subset of YAML's.
pub(crate) fn quoted(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

/// `value` as a plain scalar when it reads back unchanged, otherwise quoted.
pub(crate) fn scalar(value: &str) -> Cow<'_, str> {
    if is_plain_safe(value) {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(quoted(value))
    }
}

fn is_plain_safe(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return false;
    };
    if !(first.is_ascii_alphanumeric() || first == '/' || first == '.') {
        return false;
    }
    if value.ends_with([' ', ':']) || value.contains(": ") {
        return false;
    }
    if value
        .chars()
        .any(|c| !(c.is_ascii_alphanumeric() || "/._-: +?&=%~@,".contains(c)))
    {
        return false;
    }
    // Would resolve to a bool, null or number instead of a string.
    let lower = value.to_ascii_lowercase();
    let keyword = matches!(
        lower.as_str(),
        "true" | "false" | "yes" | "no" | "on" | "off" | "null" | "y" | "n"
    );
    !(keyword || value.parse::<f64>().is_ok())
}
