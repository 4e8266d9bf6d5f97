//! Row flattening for the CSV path

use super::value::{format_value, ValueStyle};
use serde_json::{Map, Value};

/// Flatten one record, or an ordered sequence of homogeneous records, into
/// CSV text.
///
/// The header row is the key set of the first record in insertion order;
/// all records are assumed to share it (no reconciliation across differing
/// shapes). An empty sequence yields an empty string. Every cell is run
/// through the value formatter and then quoted, with embedded double
/// quotes doubled. Sized for dozens to low hundreds of records; nothing is
/// streamed.
pub fn to_csv(data: &Value) -> String {
    let records: Vec<&Map<String, Value>> = match data {
        Value::Object(map) => vec![map],
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    };

    let Some(first) = records.first() else {
        return String::new();
    };

    let keys: Vec<&String> = first.keys().collect();
    let header = keys
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let rows = records.iter().map(|record| {
        keys.iter()
            .map(|key| {
                let value = record.get(*key).unwrap_or(&Value::Null);
                escape_cell(&format_value(value, ValueStyle::Cell))
            })
            .collect::<Vec<_>>()
            .join(",")
    });

    let mut lines = vec![header];
    lines.extend(rows);
    lines.join("\n")
}

/// Quote a cell, doubling any embedded double quotes
fn escape_cell(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}
