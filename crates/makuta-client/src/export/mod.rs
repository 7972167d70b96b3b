mod sheet;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};

use crate::backend::{TransactionQuery, WalletBackend};
use crate::error::ClientResult;
use crate::pipeline::FilterSpec;
use crate::pipeline::labels::{kind_label, status_label};
use crate::records::money::signed_amount;
use crate::records::TransactionRecord;

pub use sheet::Sheet;

/// Above this many rows, the export surfaces an informational notice so
/// the caller can warn the user before the synchronous generation runs.
pub const LARGE_EXPORT_THRESHOLD: usize = 1000;

/// Pages requested from the backend while assembling an export-all set.
const EXPORT_FETCH_PAGE_SIZE: u32 = 500;

const COLUMNS: [&str; 6] = [
    "Type",
    "Montant",
    "Statut",
    "Date",
    "Moyen de paiement",
    "Détails",
];

/// The header block always has this many rows, whatever the filters are.
pub const HEADER_BLOCK_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportScope {
    CurrentPage,
    AllFiltered,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ExportOutcome {
    pub scope: ExportScope,
    pub path: PathBuf,
    pub file_name: String,
    pub data_row_count: usize,
    pub header_row_count: usize,
    pub total_rows: usize,
    pub column_widths: Vec<usize>,
    pub notices: Vec<String>,
}

/// Export the records the caller already holds (the current page of a
/// view).
pub fn export_page(
    records: &[TransactionRecord],
    filter: &FilterSpec,
    out_dir: &Path,
) -> ClientResult<ExportOutcome> {
    write_export(records, filter, out_dir, ExportScope::CurrentPage)
}

/// Export the entire filtered set: pages through the backend until the
/// reported total is collected, then formats everything with the same row
/// logic as a page export.
pub fn export_all(
    backend: &dyn WalletBackend,
    query: &TransactionQuery,
    out_dir: &Path,
) -> ClientResult<ExportOutcome> {
    let mut collected: Vec<TransactionRecord> = Vec::new();
    let mut page = 1u32;

    loop {
        let fetch = TransactionQuery {
            page,
            per_page: EXPORT_FETCH_PAGE_SIZE,
            ..query.clone()
        };
        let response = backend.transactions(&fetch)?;
        let window_len = response.records.len();
        collected.extend(response.records);

        let done = window_len == 0
            || collected.len() as u64 >= response.page_info.total_count
            || page >= response.page_info.total_pages;
        if done {
            break;
        }
        page += 1;
    }

    write_export(&collected, &query.filter_spec(), out_dir, ExportScope::AllFiltered)
}

pub fn build_sheet(
    records: &[TransactionRecord],
    filter: &FilterSpec,
    exported_at: DateTime<Local>,
) -> Sheet {
    let mut sheet = Sheet::new(&COLUMNS);
    sheet.header_rows = header_block(filter, records.len(), exported_at);
    sheet.data_rows = records.iter().map(transaction_row).collect();
    sheet
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("transactions_{}.csv", date.format("%Y-%m-%d"))
}

/// One export row. Every cell degrades to a placeholder on malformed
/// input; a bad field never aborts the row.
fn transaction_row(record: &TransactionRecord) -> Vec<String> {
    vec![
        kind_label(&record.kind).to_string(),
        signed_amount(record.movement, record.amount, record.currency),
        status_label(&record.status).to_string(),
        record.created_at.display(),
        record.metadata.payment_method(),
        record.metadata.flatten(),
    ]
}

fn header_block(
    filter: &FilterSpec,
    total: usize,
    exported_at: DateTime<Local>,
) -> Vec<Vec<String>> {
    vec![
        vec![
            "Exporté le".to_string(),
            exported_at.format("%d/%m/%Y %H:%M").to_string(),
        ],
        vec!["Filtres".to_string(), describe_predicates(filter)],
        vec!["Période".to_string(), describe_date_range(filter)],
        vec![
            "Recherche".to_string(),
            filter
                .search
                .as_deref()
                .filter(|term| !term.trim().is_empty())
                .unwrap_or("aucune")
                .to_string(),
        ],
        vec!["Total".to_string(), format!("{total} transactions")],
    ]
}

fn describe_predicates(filter: &FilterSpec) -> String {
    let mut parts = Vec::new();
    if let Some(status) = &filter.status {
        parts.push(format!("statut: {}", status_label(status)));
    }
    if let Some(kind) = &filter.kind {
        parts.push(format!("type: {}", kind_label(kind)));
    }

    if parts.is_empty() {
        return "aucun".to_string();
    }
    parts.join(" | ")
}

fn describe_date_range(filter: &FilterSpec) -> String {
    let day = |date: NaiveDate| date.format("%d/%m/%Y").to_string();
    match (filter.date_from, filter.date_to) {
        (Some(from), Some(to)) => format!("du {} au {}", day(from), day(to)),
        (Some(from), None) => format!("depuis le {}", day(from)),
        (None, Some(to)) => format!("jusqu'au {}", day(to)),
        (None, None) => "toutes les dates".to_string(),
    }
}

fn write_export(
    records: &[TransactionRecord],
    filter: &FilterSpec,
    out_dir: &Path,
    scope: ExportScope,
) -> ClientResult<ExportOutcome> {
    let exported_at = Local::now();
    let sheet = build_sheet(records, filter, exported_at);

    let file_name = export_file_name(exported_at.date_naive());
    let path = out_dir.join(&file_name);
    sheet.write_csv(&path)?;

    let mut notices = Vec::new();
    if records.len() > LARGE_EXPORT_THRESHOLD {
        notices.push(format!(
            "Large export: {} transactions; generation may take a moment.",
            records.len()
        ));
    }

    Ok(ExportOutcome {
        scope,
        path,
        file_name,
        data_row_count: records.len(),
        header_row_count: sheet.header_rows.len(),
        total_rows: sheet.row_count(),
        column_widths: sheet.column_widths(),
        notices,
    })
}
