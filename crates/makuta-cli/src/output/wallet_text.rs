use std::io;

use serde_json::Value;

use super::format::key_value_lines;

pub fn render_wallet(data: &Value) -> io::Result<String> {
    let currency = data["summary"]["currency"].as_str().unwrap_or("USD");

    let mut lines = vec![format!("Wallet ({currency}):"), String::new()];
    lines.extend(key_value_lines(&[
        ("Balance", display(data, "balance_display")),
        ("Total earned", display(data, "total_earned_display")),
        ("Total withdrawn", display(data, "total_withdrawn_display")),
    ]));

    Ok(lines.join("\n"))
}

fn display(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}
