//! JSON rendition of a record table
//!
//! Encoding is a pretty-printed array of field-keyed objects, the tree
//! form older exports produced. Decoding accepts any array of objects and
//! pulls fields out by alias, so key spelling and value types are handled
//! as loosely as the CSV side handles headers.

use std::io::{Read, Write};

use serde_json::Value;

use crate::models::Record;

/// Write records as a pretty-printed JSON array
pub fn write_records<K: Record, W: Write>(writer: &mut W, records: &[K]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(writer, records)?;
    Ok(())
}

/// Read a JSON document into per-row draft results
///
/// The document must be an array; anything else fails the whole decode.
/// Entries that are not objects, or that cannot be promoted to a draft,
/// come back as `Err` entries.
pub fn read_records<K: Record, R: Read>(
    reader: R,
) -> Result<Vec<Result<K::Draft, String>>, String> {
    let entries: Vec<Value> =
        serde_json::from_reader(reader).map_err(|e| format!("not a JSON array: {}", e))?;

    let mut results = Vec::new();
    for entry in entries {
        let Value::Object(map) = entry else {
            results.push(Err("entry is not an object".to_string()));
            continue;
        };

        let mut wire = K::Wire::default();
        for field in K::FIELDS {
            let value = map
                .iter()
                .find(|(key, _)| field.matches(key))
                .map(|(_, value)| value);
            if let Some(raw) = value.and_then(scalar_text) {
                K::set_wire_field(&mut wire, field.name, &raw);
            }
        }
        results.push(K::draft_from_wire(wire));
    }

    Ok(results)
}

/// Render a scalar JSON value as field text; null and nested values count
/// as absent
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
