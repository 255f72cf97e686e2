use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value, table::TableOptions::detect()),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table<T: Serialize>(value: &T, options: table::TableOptions) -> anyhow::Result<String> {
    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let headers = ["key", "value"];
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&headers, &rows, options))
        }
        scalar => {
            let headers = ["value"];
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&headers, &rows, options))
        }
    }
}

/// Columns follow first appearance across rows, with `id` and `name` first.
fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let headers = ["value"];
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&headers, &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    if headers.is_empty() {
        return String::from("(no columns)");
    }
    headers.sort_by_key(|header| column_rank(header));

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| {
                    map.get(header)
                        .map_or_else(|| String::from("-"), value_to_cell)
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

/// Identity columns lead; everything else keeps its place.
fn column_rank(header: &str) -> u8 {
    match header {
        "id" | "habit_id" => 0,
        "name" => 1,
        _ => 2,
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::table::{TableOptions, render_entity_table};
    use super::{render, render_array_table, value_to_cell};
    use crate::cli::OutputFormat;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        target: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "walk", target: 3 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "walk");
        assert_eq!(parsed["target"], 3);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = vec![Example { id: "walk", target: 3 }, Example { id: "yoga", target: 2 }];
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed[1]["id"], "yoga");
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let value = Example { id: "walk", target: 3 };
        let out = render(&value, OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("walk"));
        assert!(out.contains("target"));
    }

    #[test]
    fn array_table_keeps_field_order_and_fills_gaps() {
        let items = vec![
            json!({ "name": "Walk", "target": 3 }),
            json!({ "name": "Yoga", "target": 2, "category": "wellness" }),
        ];
        let out = render_array_table(&items, PLAIN);
        let lines: Vec<&str> = out.lines().collect();

        let header = lines[0];
        let name_at = header.find("name").unwrap();
        let target_at = header.find("target").unwrap();
        let category_at = header.find("category").unwrap();
        assert!(name_at < target_at && target_at < category_at);
        assert!(lines[2].trim_end().ends_with('-'));
    }

    #[test]
    fn habit_rows_lead_with_id_and_name() {
        let items = vec![json!({
            "category": "fitness",
            "entry_count": 3,
            "id": "walk",
            "name": "Walk",
        })];
        let out = render_array_table(&items, PLAIN);
        let header: Vec<&str> = out.lines().next().unwrap().split_whitespace().collect();
        assert_eq!(header, vec!["id", "name", "category", "entry_count"]);
    }

    #[test]
    fn empty_array_renders_placeholder() {
        assert_eq!(render_array_table(&[], PLAIN), "(no rows)");
    }

    #[test]
    fn string_lists_join_into_one_cell() {
        assert_eq!(value_to_cell(&json!(["Walk", "Swim"])), "Walk, Swim");
        assert_eq!(value_to_cell(&json!(null)), "-");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "name", "entries"];
        let rows = vec![
            vec!["h1".to_string(), "Walk".to_string(), "2".to_string()],
            vec![
                "habit-200".to_string(),
                "Evening stretching".to_string(),
                "120".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("entries"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].len(), lines[3].len());
    }
}
