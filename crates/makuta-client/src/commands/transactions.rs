use crate::backend::{TransactionQuery, WalletBackend};
use crate::commands::common::{
    build_filter_spec, filter_echo, normalize_choice, open_snapshot, parse_currency_arg,
};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::{TransactionRowDto, TransactionsData};
use crate::error::ClientResult;
use crate::pipeline::labels::{kind_label, status_label};
use crate::records::TransactionRecord;
use crate::records::money::signed_amount;

const COMMAND: &str = "transactions";

#[derive(Debug, Clone, Default)]
pub struct TransactionsOptions {
    pub snapshot: String,
    pub currency: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

pub fn run_with_options(options: TransactionsOptions) -> ClientResult<SuccessEnvelope> {
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

    let page = backend.transactions(&query)?;
    let data = TransactionsData {
        filter: filter_echo(currency, &spec),
        page_info: page.page_info,
        rows: page.records.iter().map(row_dto).collect(),
    };

    success(COMMAND, data)
}

fn row_dto(record: &TransactionRecord) -> TransactionRowDto {
    TransactionRowDto {
        id: record.id.clone(),
        kind: record.kind.clone(),
        label: kind_label(&record.kind).to_string(),
        amount: signed_amount(record.movement, record.amount, record.currency),
        status: record.status.clone(),
        status_label: status_label(&record.status).to_string(),
        created_at: record.created_at.display(),
        payment_method: record.metadata.payment_method(),
    }
}
