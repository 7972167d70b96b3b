use crate::backend::{StatsQuery, WalletBackend};
use crate::commands::common::{open_snapshot, parse_currency_arg, parse_date_bound};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::StatsData;
use crate::error::{ClientError, ClientResult};
use crate::pipeline::{amount_series, breakdown_by_type, count_series};

const COMMAND: &str = "stats";

#[derive(Debug, Clone, Default)]
pub struct StatsOptions {
    pub snapshot: String,
    pub currency: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

pub fn run_with_options(options: StatsOptions) -> ClientResult<SuccessEnvelope> {
    let currency = parse_currency_arg(&options.currency, COMMAND)?;
    let date_from = parse_date_bound(options.from.as_deref(), "from", COMMAND)?;
    let date_to = parse_date_bound(options.to.as_deref(), "to", COMMAND)?;

    if let (Some(start), Some(end)) = (date_from, date_to)
        && start > end
    {
        return Err(ClientError::invalid_argument_for_command(
            "Invalid date range: `from` must be on or before `to`.",
            Some(COMMAND),
        ));
    }

    let backend = open_snapshot(&options.snapshot)?;
    let rows = backend.stats_by_type(&StatsQuery {
        currency,
        date_from,
        date_to,
    })?;

    let breakdown = breakdown_by_type(&rows, currency);
    let data = StatsData {
        currency: currency.as_str().to_string(),
        amounts: amount_series(&breakdown),
        counts: count_series(&breakdown),
        rows: breakdown,
    };

    success(COMMAND, data)
}
