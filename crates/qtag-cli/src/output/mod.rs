use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        Value::Array(items) => Ok(render_array_table(&items)),
        Value::Object(map) => Ok(render_object_table(map)),
        scalar => {
            let rows = vec![vec![value_to_cell(&scalar)]];
            Ok(table::render_entity_table(&["value"], &rows, table_options()))
        }
    }
}

/// Key/value table for the scalar fields, followed by one table per list
/// field (e.g. the per-host results of a batch).
fn render_object_table(map: Map<String, Value>) -> String {
    let (mut lists, mut fields): (Vec<_>, Vec<_>) = map
        .into_iter()
        .partition(|(_, value)| value.is_array());
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    lists.sort_by(|a, b| a.0.cmp(&b.0));

    let rows = fields
        .iter()
        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
        .collect::<Vec<_>>();
    let mut sections = vec![table::render_entity_table(
        &["key", "value"],
        &rows,
        table_options(),
    )];

    for (key, value) in lists {
        if let Value::Array(items) = value {
            sections.push(format!("\n{key}:\n{}", render_array_table(&items)));
        }
    }
    sections.join("\n")
}

fn render_array_table(items: &[Value]) -> String {
    let options = table_options();

    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
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
    headers.sort();

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{render, table::render_entity_table};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Host {
        id: u64,
        name: &'static str,
    }

    #[derive(Serialize)]
    struct Batch {
        status: &'static str,
        tag_id: u64,
        results: Vec<Host>,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Host { id: 42, name: "WEB01" };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], 42);
        assert_eq!(parsed["name"], "WEB01");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Host { id: 42, name: "WEB01" };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_has_a_column_per_field() {
        let hosts = vec![Host { id: 1, name: "a" }, Host { id: 22, name: "bb" }];
        let out = render(&hosts, OutputFormat::Table).expect("table render should work");
        let header = out.lines().next().expect("header line");
        assert!(header.find("id") < header.find("name"));
    }

    #[test]
    fn table_render_splits_out_result_lists() {
        let batch = Batch {
            status: "processed",
            tag_id: 7,
            results: vec![Host { id: 1, name: "a" }],
        };
        let out = render(&batch, OutputFormat::Table).expect("table render should work");
        assert!(out.contains("processed"));
        assert!(out.contains("results:"));
        assert!(!out.contains("[{"));
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let out = render(&Vec::<Host>::new(), OutputFormat::Table).expect("table render");
        assert_eq!(out, "(no rows)");
    }

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["id", "status", "name"];
        let rows = vec![
            vec!["1".to_string(), "tagged".to_string(), "web".to_string()],
            vec![
                "104930684".to_string(),
                "update_failed".to_string(),
                "DESKTOP-TTEUIJL".to_string(),
            ],
        ];

        let table = render_entity_table(
            &headers,
            &rows,
            super::table::TableOptions {
                max_width: None,
                color: false,
            },
        );
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("status"));
        assert!(lines[1].chars().all(|c| c == '-'));
    }
}
