use serde::Serialize;

use crate::pipeline::labels::kind_label;
use crate::records::{Currency, StatRow};

/// One aggregated row per distinct transaction type, restricted to a
/// single currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeBreakdown {
    pub kind: String,
    pub label: String,
    pub total_amount: f64,
    pub count: i64,
    pub first_transaction: Option<String>,
    pub last_transaction: Option<String>,
}

/// Label/value pairs ready for a chart axis. Amount and count series are
/// both derived from the same breakdown so their label order always
/// agrees for side-by-side rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// Group stat rows by exact type code, keeping only the target currency.
/// Duplicate rows for one type sum their totals and counts; ordering is
/// first-seen, which keeps repeated aggregations deterministic.
pub fn breakdown_by_type(rows: &[StatRow], currency: Currency) -> Vec<TypeBreakdown> {
    let mut breakdown: Vec<TypeBreakdown> = Vec::new();

    for row in rows {
        if row.currency != currency {
            continue;
        }

        if let Some(existing) = breakdown.iter_mut().find(|entry| entry.kind == row.kind) {
            existing.total_amount += row.total_amount;
            existing.count += row.count;
            if existing.first_transaction.is_none() {
                existing.first_transaction = row.first_transaction.clone();
            }
            if row.last_transaction.is_some() {
                existing.last_transaction = row.last_transaction.clone();
            }
            continue;
        }

        breakdown.push(TypeBreakdown {
            kind: row.kind.clone(),
            label: kind_label(&row.kind).to_string(),
            total_amount: row.total_amount,
            count: row.count,
            first_transaction: row.first_transaction.clone(),
            last_transaction: row.last_transaction.clone(),
        });
    }

    breakdown
}

pub fn amount_series(breakdown: &[TypeBreakdown]) -> ChartSeries {
    ChartSeries {
        labels: breakdown.iter().map(|entry| entry.label.clone()).collect(),
        values: breakdown.iter().map(|entry| entry.total_amount).collect(),
    }
}

pub fn count_series(breakdown: &[TypeBreakdown]) -> ChartSeries {
    ChartSeries {
        labels: breakdown.iter().map(|entry| entry.label.clone()).collect(),
        values: breakdown.iter().map(|entry| entry.count as f64).collect(),
    }
}

#[cfg(test)]
mod tests {
    use crate::records::{Currency, StatRow};

    use super::{amount_series, breakdown_by_type, count_series};

    fn row(kind: &str, currency: Currency, total_amount: f64, count: i64) -> StatRow {
        StatRow {
            kind: kind.to_string(),
            currency,
            total_amount,
            count,
            first_transaction: None,
            last_transaction: None,
        }
    }

    #[test]
    fn restricts_to_the_target_currency() {
        let rows = vec![
            row("purchase", Currency::Usd, 120.5, 3),
            row("purchase", Currency::Cdf, 300000.0, 1),
        ];

        let breakdown = breakdown_by_type(&rows, Currency::Usd);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].label, "Achat");
        assert_eq!(breakdown[0].total_amount, 120.5);
        assert_eq!(breakdown[0].count, 3);
    }

    #[test]
    fn duplicate_type_rows_sum_into_one_entry() {
        let rows = vec![
            row("withdrawal", Currency::Usd, 40.0, 2),
            row("purchase", Currency::Usd, 10.0, 1),
            row("withdrawal", Currency::Usd, 60.0, 3),
        ];

        let breakdown = breakdown_by_type(&rows, Currency::Usd);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].kind, "withdrawal");
        assert_eq!(breakdown[0].total_amount, 100.0);
        assert_eq!(breakdown[0].count, 5);
    }

    #[test]
    fn unknown_type_keeps_its_raw_code_as_label() {
        let rows = vec![row("airtime_topup", Currency::Cdf, 5000.0, 1)];
        let breakdown = breakdown_by_type(&rows, Currency::Cdf);
        assert_eq!(breakdown[0].label, "airtime_topup");
    }

    #[test]
    fn amount_and_count_series_share_label_order() {
        let rows = vec![
            row("purchase", Currency::Usd, 120.5, 3),
            row("withdrawal", Currency::Usd, 80.0, 2),
        ];
        let breakdown = breakdown_by_type(&rows, Currency::Usd);

        let amounts = amount_series(&breakdown);
        let counts = count_series(&breakdown);
        assert_eq!(amounts.labels, counts.labels);
        assert_eq!(amounts.labels, vec!["Achat", "Retrait"]);
        assert_eq!(amounts.values, vec![120.5, 80.0]);
        assert_eq!(counts.values, vec![3.0, 2.0]);
    }
}
