use chrono::NaiveDate;

use crate::error::ClientResult;
use crate::pipeline::{FilterSpec, PageInfo};
use crate::records::{Currency, StatRow, TransactionRecord, WalletSummary};

/// Query parameters for one transactions read, mirroring the platform's
/// `GET /transactions` contract.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionQuery {
    pub currency: Option<Currency>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search: Option<String>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            currency: None,
            status: None,
            kind: None,
            date_from: None,
            date_to: None,
            search: None,
            page: 1,
            per_page: 25,
        }
    }
}

impl TransactionQuery {
    pub fn filter_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            status: self.status.clone(),
            kind: self.kind.clone(),
            date_from: self.date_from,
            date_to: self.date_to,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransactionPage {
    pub records: Vec<TransactionRecord>,
    pub page_info: PageInfo,
}

/// Query parameters for `GET /stats/by-type`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsQuery {
    pub currency: Currency,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// The backend the views fetch from. The live implementation is a REST
/// service owned by the platform; this crate talks to it only through this
/// seam, so tests and the CLI can substitute a saved snapshot.
pub trait WalletBackend {
    fn transactions(&self, query: &TransactionQuery) -> ClientResult<TransactionPage>;
    fn wallet_summary(&self, currency: Currency) -> ClientResult<WalletSummary>;
    fn stats_by_type(&self, query: &StatsQuery) -> ClientResult<Vec<StatRow>>;
}
