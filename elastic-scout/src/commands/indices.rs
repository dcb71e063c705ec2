//! Show the cluster's indices (cat command).

use serde_json::Value;
use tracing::warn;

use crate::config::Dependencies;
use crate::AppError;

/// Fetch the cluster's indices and print them as an aligned table.
pub async fn indices() -> Result<(), AppError> {
    let deps = Dependencies::new().await?;
    let rows = deps.backend.cat_indices().await?;

    if rows.is_empty() {
        warn!("No indices found");
        return Ok(());
    }

    print!("{}", render_table(&rows));
    Ok(())
}

/// Render cat-API rows as an aligned table, columns taken from the first
/// row's keys.
fn render_table(rows: &[Value]) -> String {
    let headers: Vec<String> = rows
        .first()
        .and_then(Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| headers.iter().map(|header| cell(row.get(header))).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &cells {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    let mut output = String::new();
    output.push_str(&render_row(&headers, &widths));
    for row in &cells {
        output.push_str(&render_row(row, &widths));
    }
    output
}

fn render_row(values: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (value, width) in values.iter().zip(widths.iter().copied()) {
        line.push_str(&format!("{:<width$}  ", value, width = width));
    }
    line.trim_end().to_string() + "\n"
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            json!({ "health": "green", "index": "products", "docs.count": "120" }),
            json!({ "health": "yellow", "index": "p", "docs.count": "3" }),
        ];

        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        // Keys come back sorted from the JSON object.
        assert!(lines[0].starts_with("docs.count"));
        assert!(lines[1].contains("green"));
        assert!(lines[2].contains("yellow"));

        // Every column starts at the same offset on each line.
        let offset = lines[0].find("health").unwrap();
        assert_eq!(lines[1].find("green").unwrap(), offset);
        assert_eq!(lines[2].find("yellow").unwrap(), offset);
    }

    #[test]
    fn test_cell_formats_non_strings() {
        assert_eq!(cell(Some(&json!("green"))), "green");
        assert_eq!(cell(Some(&json!(3))), "3");
        assert_eq!(cell(Some(&Value::Null)), "");
        assert_eq!(cell(None), "");
    }
}
