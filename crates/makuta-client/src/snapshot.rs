use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;

use crate::backend::{StatsQuery, TransactionPage, TransactionQuery, WalletBackend};
use crate::error::{ClientError, ClientResult};
use crate::pipeline::{apply_filter, paginate};
use crate::records::parse::{records_from_value, stat_rows_from_value, wallet_summaries_from_value};
use crate::records::{Currency, DateStamp, StatRow, TransactionRecord, WalletSummary};

/// A saved backend response standing in for the live REST service: one
/// JSON object with `transactions`, `wallet`, and `stats` arrays. Queries
/// are answered by running the same filter pipeline the views use, which
/// keeps snapshot reads faithful to the server-side contract.
#[derive(Debug, Clone)]
pub struct SnapshotBackend {
    transactions: Vec<TransactionRecord>,
    wallet: Vec<WalletSummary>,
    stats: Vec<StatRow>,
}

impl SnapshotBackend {
    pub fn open(path: &Path) -> ClientResult<Self> {
        let body = fs::read_to_string(path).map_err(|error| {
            ClientError::snapshot_unreadable(&path.display().to_string(), &error.to_string())
        })?;
        Self::from_json(&body)
    }

    pub fn from_json(body: &str) -> ClientResult<Self> {
        let payload = serde_json::from_str::<Value>(body)
            .map_err(|error| ClientError::invalid_snapshot_format(&error.to_string()))?;

        let Some(object) = payload.as_object() else {
            return Err(ClientError::invalid_snapshot_format(
                "top level must be a JSON object",
            ));
        };

        Ok(Self {
            transactions: object
                .get("transactions")
                .map(records_from_value)
                .unwrap_or_default(),
            wallet: object
                .get("wallet")
                .map(wallet_summaries_from_value)
                .unwrap_or_default(),
            stats: object
                .get("stats")
                .map(stat_rows_from_value)
                .unwrap_or_default(),
        })
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

impl WalletBackend for SnapshotBackend {
    fn transactions(&self, query: &TransactionQuery) -> ClientResult<TransactionPage> {
        let working_set: Vec<TransactionRecord> = match query.currency {
            Some(currency) => self
                .transactions
                .iter()
                .filter(|record| record.currency == currency)
                .cloned()
                .collect(),
            None => self.transactions.clone(),
        };

        let filtered = apply_filter(&working_set, &query.filter_spec());
        let (window, page_info) = paginate(&filtered, query.page, query.per_page);

        Ok(TransactionPage {
            records: window.to_vec(),
            page_info,
        })
    }

    fn wallet_summary(&self, currency: Currency) -> ClientResult<WalletSummary> {
        // A currency with no activity yet reads as zero balances, matching
        // the live service.
        Ok(self
            .wallet
            .iter()
            .find(|summary| summary.currency == currency)
            .cloned()
            .unwrap_or(WalletSummary {
                currency,
                balance: 0.0,
                total_earned: 0.0,
                total_withdrawn: 0.0,
            }))
    }

    fn stats_by_type(&self, query: &StatsQuery) -> ClientResult<Vec<StatRow>> {
        // Snapshot stats are pre-aggregated by the backend, so date bounds
        // gate whole rows on their first/last transaction coverage: a row
        // is dropped when its coverage ended before the window opened or
        // started after it closed.
        Ok(self
            .stats
            .iter()
            .filter(|row| row.currency == query.currency && coverage_overlaps(row, query))
            .cloned()
            .collect())
    }
}

/// A row whose coverage stamps cannot be read stays in rather than
/// vanishing under a filter.
fn coverage_overlaps(row: &StatRow, query: &StatsQuery) -> bool {
    if let Some(from) = query.date_from
        && let Some(last) = coverage_date(row.last_transaction.as_deref())
        && last < from
    {
        return false;
    }
    if let Some(to) = query.date_to
        && let Some(first) = coverage_date(row.first_transaction.as_deref())
        && first > to
    {
        return false;
    }
    true
}

fn coverage_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.map(DateStamp::parse).and_then(|stamp| stamp.date())
}
