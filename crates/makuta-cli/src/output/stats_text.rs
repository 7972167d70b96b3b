use std::io;

use serde_json::Value;

use super::format::{Align, Column, render_table};

const COLUMNS: [Column; 4] = [
    Column {
        name: "Type",
        align: Align::Left,
    },
    Column {
        name: "Montant",
        align: Align::Right,
    },
    Column {
        name: "Nombre",
        align: Align::Right,
    },
    Column {
        name: "Dernière",
        align: Align::Left,
    },
];

pub fn render_stats(data: &Value) -> io::Result<String> {
    let currency = data
        .get("currency")
        .and_then(Value::as_str)
        .unwrap_or("USD");
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if rows.is_empty() {
        return Ok(format!("No {currency} transactions to aggregate."));
    }

    let mut lines = vec![format!("Breakdown by type ({currency}):"), String::new()];

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let amount = row["total_amount"].as_f64().unwrap_or(0.0);
            let count = row["count"].as_i64().unwrap_or(0);
            vec![
                row["label"].as_str().unwrap_or("-").to_string(),
                format!("{amount:.2}"),
                count.to_string(),
                row["last_transaction"].as_str().unwrap_or("-").to_string(),
            ]
        })
        .collect();
    lines.extend(render_table(&COLUMNS, &table_rows));

    Ok(lines.join("\n"))
}
