//! Canonical display strings for arbitrary field values

use serde_json::Value;

/// Rendering context for a formatted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    /// Human-readable contexts: nested values pretty-printed, 2-space indent
    Display,
    /// CSV cell embedding: nested values serialized compactly
    Cell,
}

/// Convert any field value into a display string.
///
/// Total over its input: null maps to `"N/A"`, strings pass through
/// verbatim, objects and arrays become their canonical JSON serialization
/// with key order as encountered, and any other value its direct string
/// conversion.
pub fn format_value(value: &Value, style: ValueStyle) -> String {
    match value {
        Value::Null => "N/A".to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => match style {
            ValueStyle::Display => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            ValueStyle::Cell => value.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_null_is_not_available() {
        assert_eq!(format_value(&Value::Null, ValueStyle::Display), "N/A");
        assert_eq!(format_value(&Value::Null, ValueStyle::Cell), "N/A");
    }

    #[test]
    fn test_string_passes_through_unquoted() {
        assert_eq!(
            format_value(&json!("hello world"), ValueStyle::Display),
            "hello world"
        );
    }

    #[test]
    fn test_number_direct_conversion() {
        assert_eq!(format_value(&json!(42), ValueStyle::Display), "42");
        assert_eq!(format_value(&json!(2.5), ValueStyle::Cell), "2.5");
    }

    #[test]
    fn test_bool_direct_conversion() {
        assert_eq!(format_value(&json!(false), ValueStyle::Cell), "false");
    }

    #[test]
    fn test_object_pretty_in_display_style() {
        assert_eq!(
            format_value(&json!({"a": 1}), ValueStyle::Display),
            "{\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn test_object_compact_in_cell_style() {
        assert_eq!(
            format_value(&json!({"a": 1, "b": [2, 3]}), ValueStyle::Cell),
            r#"{"a":1,"b":[2,3]}"#
        );
    }

    #[test]
    fn test_array_key_order_preserved() {
        let value = json!([{"word": "cat", "frequency": 5}]);
        assert_eq!(
            format_value(&value, ValueStyle::Cell),
            r#"[{"word":"cat","frequency":5}]"#
        );
    }
}
