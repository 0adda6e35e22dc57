use serde_json::Value;

/// Check if a value is truthy under nil-or-false rules.
///
/// Only `null` and `false` are falsy. Empty strings, arrays and objects are
/// truthy, as are all numbers including zero.
///
/// # Examples
///
/// ```
/// use embedded_localization_util::truthy::is_truthy;
/// use serde_json::json;
///
/// assert!(!is_truthy(&json!(null)));
/// assert!(!is_truthy(&json!(false)));
/// assert!(is_truthy(&json!({})));
/// assert!(is_truthy(&json!(0)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Check if a value is blank.
///
/// Blank covers every falsy value plus empty strings, empty arrays and empty
/// objects.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(true) | Value::Number(_) => false,
    }
}
