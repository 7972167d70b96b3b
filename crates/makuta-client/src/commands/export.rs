use std::path::PathBuf;

use crate::backend::{TransactionQuery, WalletBackend};
use crate::commands::common::{
    build_filter_spec, filter_echo, normalize_choice, open_snapshot, parse_currency_arg,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::error::ClientResult;
use crate::export::{export_all, export_page};

const COMMAND: &str = "export";

#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub snapshot: String,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub search: Option<String>,
    /// Export the whole filtered set instead of one page.
    pub all: bool,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub out_dir: Option<String>,
}

pub fn run_with_options(options: ExportOptions) -> ClientResult<SuccessEnvelope> {
    let currency = match normalize_choice(options.currency.as_deref()) {
        Some(code) => Some(parse_currency_arg(&code, COMMAND)?),
        None => None,
    };
    let spec = build_filter_spec(
        options.search.as_deref(),
        options.status.as_deref(),
        options.kind.as_deref(),
        options.from.as_deref(),
        options.to.as_deref(),
        COMMAND,
    )?;

    let backend = open_snapshot(&options.snapshot)?;
    let query = TransactionQuery {
        currency,
        status: spec.status.clone(),
        kind: spec.kind.clone(),
        date_from: spec.date_from,
        date_to: spec.date_to,
        search: spec.search.clone(),
        page: options.page.unwrap_or(1),
        per_page: options.per_page.unwrap_or(25),
    };
    let out_dir = PathBuf::from(options.out_dir.unwrap_or_else(|| ".".to_string()));

    let outcome = if options.all {
        export_all(&backend, &query, &out_dir)?
    } else {
        let page = backend.transactions(&query)?;
        export_page(&page.records, &spec, &out_dir)?
    };

    let data = ExportData {
        filter: filter_echo(currency, &spec),
        outcome,
    };

    success(COMMAND, data)
}
