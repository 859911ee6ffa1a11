//! Plain-text table rendering of a record set.

use std::fmt::Write;

use crate::types::RecordSet;

/// Render a record set as a fixed-width, left-aligned text table.
///
/// Each column is sized to its widest cell or header; the header row is followed by a
/// dash rule and one line per record, in input order. Cells are rendered with
/// [`crate::types::Value`]'s `Display` (`null` for missing values).
pub fn render_table(records: &RecordSet) -> String {
    let headers: Vec<&str> = records.schema.field_names().collect();
    let rows: Vec<Vec<String>> = records
        .records
        .iter()
        .map(|record| record.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &headers, &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        write_row(&mut out, &cells, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let _ = write!(line, "{cell:<width$}");
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::render_table;
    use crate::types::{DataType, Field, RecordSet, Schema, Value};

    fn waste_records() -> RecordSet {
        let schema = Schema::new(vec![
            Field::new("zone", DataType::Utf8),
            Field::new("type", DataType::Utf8),
            Field::new("weight", DataType::Int64),
        ]);
        RecordSet::new(
            schema,
            vec![
                vec![
                    Value::Utf8("Zone A".to_string()),
                    Value::Utf8("Organic".to_string()),
                    Value::Int64(120),
                ],
                vec![
                    Value::Utf8("Zone B".to_string()),
                    Value::Utf8("Plastic".to_string()),
                    Value::Int64(80),
                ],
            ],
        )
    }

    #[test]
    fn render_table_aligns_columns_to_widest_cell() {
        let text = render_table(&waste_records());
        let expected = "\
zone    type     weight
-----------------------
Zone A  Organic  120
Zone B  Plastic  80
";
        assert_eq!(text, expected);
    }

    #[test]
    fn render_table_on_empty_set_is_header_and_rule_only() {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("note", DataType::Utf8),
        ]);
        let rs = RecordSet::new(schema, vec![]);
        let text = render_table(&rs);
        assert_eq!(text, "id  note\n--------\n");
    }

    #[test]
    fn render_table_widens_for_long_headers_and_nulls() {
        let schema = Schema::new(vec![Field::new("description", DataType::Utf8)]);
        let rs = RecordSet::new(schema, vec![vec![Value::Null]]);
        let text = render_table(&rs);
        assert_eq!(text, "description\n-----------\nnull\n");
    }
}
