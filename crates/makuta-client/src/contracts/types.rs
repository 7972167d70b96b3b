use serde::Serialize;

use crate::export::ExportOutcome;
use crate::pipeline::{ChartSeries, PageInfo, TypeBreakdown};
use crate::records::WalletSummary;

/// Echo of the predicates a command actually applied, for display and for
/// scripting against `--json` output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterEcho {
    pub currency: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionRowDto {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub amount: String,
    pub status: String,
    pub status_label: String,
    pub created_at: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionsData {
    pub filter: FilterEcho,
    pub page_info: PageInfo,
    pub rows: Vec<TransactionRowDto>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsData {
    pub currency: String,
    pub rows: Vec<TypeBreakdown>,
    pub amounts: ChartSeries,
    pub counts: ChartSeries,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletData {
    pub summary: WalletSummary,
    pub balance_display: String,
    pub total_earned_display: String,
    pub total_withdrawn_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub filter: FilterEcho,
    pub outcome: ExportOutcome,
}
