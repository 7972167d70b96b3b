use std::io;

use serde_json::Value;

use super::format::key_value_lines;

pub fn render_export(data: &Value) -> io::Result<String> {
    let outcome = data.get("outcome").cloned().unwrap_or(Value::Null);

    let data_rows = outcome["data_row_count"].as_u64().unwrap_or(0);
    let total_rows = outcome["total_rows"].as_u64().unwrap_or(0);
    let scope = match outcome["scope"].as_str() {
        Some("all_filtered") => "all filtered transactions",
        _ => "current page",
    };

    let mut lines = vec!["Export written.".to_string(), String::new()];
    lines.extend(key_value_lines(&[
        ("File", text(&outcome, "file_name")),
        ("Path", text(&outcome, "path")),
        ("Rows", format!("{data_rows} data rows ({total_rows} total)")),
        ("Scope", scope.to_string()),
    ]));

    let notices = outcome
        .get("notices")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !notices.is_empty() {
        lines.push(String::new());
        lines.push("Notices:".to_string());
        for notice in &notices {
            lines.push(format!("  - {}", notice.as_str().unwrap_or("")));
        }
    }

    Ok(lines.join("\n"))
}

fn text(outcome: &Value, key: &str) -> String {
    outcome
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}
