//! Field-level fallback helpers shared by the content and theme normalizers.
//!
//! A stored value only replaces its default when it is "truthy": `null`,
//! `false`, `0` and the empty string count as absent. Arrays and objects are
//! always present, even when empty.

use serde_json::{Map, Value};

pub(crate) type Object = Map<String, Value>;

/// Truthiness of a stored value, as seen by the editing front end.
pub(crate) fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a nested object. Anything that is not an object reads as absent.
pub(crate) fn section<'a>(parent: Option<&'a Object>, key: &str) -> Option<&'a Object> {
    parent?.get(key)?.as_object()
}

fn present<'a>(parent: Option<&'a Object>, key: &str) -> Option<&'a Value> {
    parent?.get(key).filter(|v| is_present(v))
}

/// A text field: non-empty strings win, everything else takes the default.
pub(crate) fn text(parent: Option<&Object>, key: &str, default: &str) -> String {
    match present(parent, key) {
        Some(Value::String(s)) => s.clone(),
        _ => default.to_string(),
    }
}

/// A list, replaced wholesale when present. Entries are kept one for one as
/// stored; only the presence of the list itself is checked. A present value
/// that is not an array takes the default.
pub(crate) fn list<T>(parent: Option<&Object>, key: &str, default: &[T]) -> Vec<T>
where
    T: From<Value> + Clone,
{
    match present(parent, key) {
        Some(Value::Array(items)) => items.iter().cloned().map(T::from).collect(),
        _ => default.to_vec(),
    }
}
