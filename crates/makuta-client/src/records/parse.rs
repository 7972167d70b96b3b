use serde_json::Value;

use crate::records::{
    Currency, DateStamp, Metadata, Movement, StatRow, TransactionRecord, WalletSummary,
};

/// Coerce every usable element of a backend `transactions` array. Rows
/// that cannot be attributed to a supported currency are skipped rather
/// than failing the whole payload.
pub fn records_from_value(value: &Value) -> Vec<TransactionRecord> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items.iter().filter_map(record_from_value).collect()
}

pub fn record_from_value(value: &Value) -> Option<TransactionRecord> {
    let object = value.as_object()?;

    let currency = read_text(object.get("currency")).and_then(|code| Currency::parse(&code))?;
    // The backend spells the direction field `mouvment`; accept the
    // conventional spelling too. A corrupt direction degrades to `in`.
    let movement = read_text(object.get("mouvment"))
        .or_else(|| read_text(object.get("movement")))
        .and_then(|raw| Movement::parse(&raw))
        .unwrap_or(Movement::In);

    Some(TransactionRecord {
        id: read_text(object.get("id")).unwrap_or_default(),
        kind: read_text(object.get("type")).unwrap_or_default(),
        movement,
        amount: coerce_amount(object.get("amount")),
        currency,
        status: read_text(object.get("status")).unwrap_or_default(),
        created_at: read_stamp(object.get("created_at")),
        updated_at: read_stamp(object.get("updated_at")),
        metadata: Metadata::normalize(object.get("metadata")),
    })
}

pub fn stat_rows_from_value(value: &Value) -> Vec<StatRow> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items.iter().filter_map(stat_row_from_value).collect()
}

pub fn stat_row_from_value(value: &Value) -> Option<StatRow> {
    let object = value.as_object()?;
    let currency = read_text(object.get("currency")).and_then(|code| Currency::parse(&code))?;

    Some(StatRow {
        kind: read_text(object.get("type")).unwrap_or_default(),
        currency,
        total_amount: coerce_amount(object.get("total_amount")).unwrap_or(0.0),
        count: coerce_count(object.get("count")),
        first_transaction: read_text(object.get("first_transaction")),
        last_transaction: read_text(object.get("last_transaction")),
    })
}

pub fn wallet_summaries_from_value(value: &Value) -> Vec<WalletSummary> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let object = item.as_object()?;
            let currency =
                read_text(object.get("currency")).and_then(|code| Currency::parse(&code))?;
            Some(WalletSummary {
                currency,
                balance: coerce_amount(object.get("balance")).unwrap_or(0.0),
                total_earned: coerce_amount(object.get("total_earned")).unwrap_or(0.0),
                total_withdrawn: coerce_amount(object.get("total_withdrawn")).unwrap_or(0.0),
            })
        })
        .collect()
}

/// Amounts arrive as numbers or as numeric strings, sometimes with
/// grouping characters. Stored amounts are magnitudes, so a stray sign is
/// dropped here; direction lives in the movement field. Anything
/// non-numeric is treated as absent.
pub fn coerce_amount(value: Option<&Value>) -> Option<f64> {
    let value = value?;

    if let Some(number) = value.as_f64() {
        return Some(number.abs());
    }

    let text = value.as_str()?.trim().replace([',', ' '], "");
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().map(f64::abs)
}

fn coerce_count(value: Option<&Value>) -> i64 {
    let Some(value) = value else {
        return 0;
    };

    if let Some(count) = value.as_i64() {
        return count;
    }
    value
        .as_str()
        .and_then(|text| text.trim().parse::<i64>().ok())
        .unwrap_or(0)
}

fn read_text(value: Option<&Value>) -> Option<String> {
    let value = value?;

    if let Some(text) = value.as_str() {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        return Some(trimmed.to_string());
    }

    if value.is_number() {
        return Some(value.to_string());
    }

    None
}

fn read_stamp(value: Option<&Value>) -> DateStamp {
    match read_text(value) {
        Some(raw) => DateStamp::parse(&raw),
        None => DateStamp::missing(),
    }
}
