//! CSV rendition of a record table
//!
//! Encoding writes a header of canonical field names and one line per
//! record, quoting only where the value demands it. Decoding resolves
//! header columns through each kind's alias table, so files whose headers
//! use older or translated spellings still import.

use std::io::{Read, Write};

use crate::models::Record;

/// Write records as CSV with a header row
///
/// Columns are the id followed by the kind's fields in declaration order.
/// An empty slice produces the header line alone.
pub fn write_records<K: Record, W: Write>(writer: &mut W, records: &[K]) -> std::io::Result<()> {
    let mut header = vec!["id"];
    header.extend(K::FIELDS.iter().map(|f| f.name));
    writeln!(writer, "{}", header.join(","))?;

    for record in records {
        let mut row = vec![record.id().to_string()];
        row.extend(record.field_values().iter().map(|v| escape_csv(v)));
        writeln!(writer, "{}", row.join(","))?;
    }

    Ok(())
}

/// Read a CSV document into per-row draft results
///
/// Columns whose headers match no alias are ignored, the id column
/// included. Rows that cannot be read or promoted come back as `Err`
/// entries; only an unreadable header fails the whole decode.
pub fn read_records<K: Record, R: Read>(
    reader: R,
) -> Result<Vec<Result<K::Draft, String>>, String> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| format!("unreadable header row: {}", e))?
        .clone();

    // Field each column feeds, resolved once for the whole document
    let columns: Vec<Option<&'static str>> = headers
        .iter()
        .map(|header| {
            K::FIELDS
                .iter()
                .find(|field| field.matches(header))
                .map(|field| field.name)
        })
        .collect();

    let mut results = Vec::new();
    for record in csv_reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                results.push(Err(format!("unreadable row: {}", e)));
                continue;
            }
        };

        let mut wire = K::Wire::default();
        for (idx, column) in columns.iter().enumerate() {
            if let (Some(field), Some(raw)) = (column, record.get(idx)) {
                K::set_wire_field(&mut wire, field, raw);
            }
        }
        results.push(K::draft_from_wire(wire));
    }

    Ok(results)
}

/// Escape a value for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
