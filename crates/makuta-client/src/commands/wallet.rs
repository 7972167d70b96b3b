use crate::backend::WalletBackend;
use crate::commands::common::{open_snapshot, parse_currency_arg};
use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::WalletData;
use crate::error::ClientResult;
use crate::records::money::format_amount;

const COMMAND: &str = "wallet";

#[derive(Debug, Clone, Default)]
pub struct WalletOptions {
    pub snapshot: String,
    pub currency: String,
}

pub fn run_with_options(options: WalletOptions) -> ClientResult<SuccessEnvelope> {
    let currency = parse_currency_arg(&options.currency, COMMAND)?;
    let backend = open_snapshot(&options.snapshot)?;
    let summary = backend.wallet_summary(currency)?;

    let data = WalletData {
        balance_display: format_amount(Some(summary.balance), currency),
        total_earned_display: format_amount(Some(summary.total_earned), currency),
        total_withdrawn_display: format_amount(Some(summary.total_withdrawn), currency),
        summary,
    };

    success(COMMAND, data)
}
