use std::io;

use serde_json::Value;

use super::format::{Align, Column, render_table};

const COLUMNS: [Column; 5] = [
    Column {
        name: "Date",
        align: Align::Left,
    },
    Column {
        name: "Type",
        align: Align::Left,
    },
    Column {
        name: "Montant",
        align: Align::Right,
    },
    Column {
        name: "Statut",
        align: Align::Left,
    },
    Column {
        name: "Moyen de paiement",
        align: Align::Left,
    },
];

pub fn render_transactions(data: &Value) -> io::Result<String> {
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if rows.is_empty() {
        return Ok("No transactions match the current filters.".to_string());
    }

    let total = data["page_info"]["total_count"].as_u64().unwrap_or(0);
    let page = data["page_info"]["page"].as_u64().unwrap_or(1);
    let total_pages = data["page_info"]["total_pages"].as_u64().unwrap_or(1);

    let mut lines = vec![
        format!("{total} transactions (page {page} of {total_pages})"),
        String::new(),
    ];

    let table_rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                cell(row, "created_at"),
                cell(row, "label"),
                cell(row, "amount"),
                cell(row, "status_label"),
                cell(row, "payment_method"),
            ]
        })
        .collect();
    lines.extend(render_table(&COLUMNS, &table_rows));

    Ok(lines.join("\n"))
}

fn cell(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("-")
        .to_string()
}
