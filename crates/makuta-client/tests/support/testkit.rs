use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::{Builder, TempDir};

pub fn temp_workspace(prefix: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = Builder::new().prefix(prefix).tempdir_in("/tmp")?;
    let root = dir.path().to_path_buf();
    Ok((dir, root))
}

pub fn write_snapshot(dir: &Path, payload: &Value) -> PathBuf {
    let path = dir.join("snapshot.json");
    let body = serde_json::to_string(payload);
    assert!(body.is_ok());
    if let Ok(body) = body {
        let written = fs::write(&path, body);
        assert!(written.is_ok());
    }
    path
}

pub fn transaction(
    id: &str,
    kind: &str,
    movement: &str,
    amount: f64,
    currency: &str,
    status: &str,
    created_at: &str,
) -> Value {
    json!({
        "id": id,
        "type": kind,
        "mouvment": movement,
        "amount": amount,
        "currency": currency,
        "status": status,
        "created_at": created_at,
        "metadata": {"method": "Mobile Money", "reference": format!("ref-{id}")}
    })
}

pub fn snapshot_with_transactions(transactions: Vec<Value>) -> Value {
    json!({
        "transactions": transactions,
        "wallet": [
            {"currency": "USD", "balance": "125.40", "total_earned": 500, "total_withdrawn": 374.6},
            {"currency": "CDF", "balance": 250000, "total_earned": "1,000,000", "total_withdrawn": 750000}
        ],
        "stats": [
            {"type": "purchase", "currency": "USD", "total_amount": "120.50", "count": 3,
             "first_transaction": "01/03/2024", "last_transaction": "20/03/2024"},
            {"type": "purchase", "currency": "CDF", "total_amount": "300000", "count": 1,
             "first_transaction": "05/03/2024", "last_transaction": "05/03/2024"},
            {"type": "withdrawal", "currency": "USD", "total_amount": 80, "count": 2,
             "first_transaction": "01/03/2024", "last_transaction": "10/03/2024"}
        ]
    })
}

pub fn march_sample() -> Vec<Value> {
    vec![
        transaction("t1", "withdrawal", "out", 50.0, "USD", "completed", "01/03/2024"),
        transaction("t2", "purchase", "out", 12.5, "USD", "completed", "15/03/2024 10:30:00"),
        transaction("t3", "reception", "in", 40.0, "USD", "pending", "2024-03-20T08:00:00Z"),
        transaction("t4", "purchase", "out", 300000.0, "CDF", "completed", "05/03/2024"),
        transaction("t5", "transfer", "out", 20.0, "USD", "cancelled", "01/04/2024"),
    ]
}
