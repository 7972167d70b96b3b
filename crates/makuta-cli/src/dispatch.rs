use makuta_client::commands;
use makuta_client::commands::export::ExportOptions;
use makuta_client::commands::stats::StatsOptions;
use makuta_client::commands::transactions::TransactionsOptions;
use makuta_client::commands::wallet::WalletOptions;
use makuta_client::{ClientResult, SuccessEnvelope};

use crate::cli::{Cli, Commands};

pub fn dispatch(cli: &Cli) -> ClientResult<SuccessEnvelope> {
    match &cli.command {
        Commands::Transactions {
            snapshot,
            currency,
            status,
            kind,
            from,
            to,
            search,
            page,
            per_page,
            json: _,
        } => commands::transactions::run_with_options(TransactionsOptions {
            snapshot: snapshot.clone(),
            currency: currency.clone(),
            status: status.clone(),
            kind: kind.clone(),
            from: from.clone(),
            to: to.clone(),
            search: search.clone(),
            page: *page,
            per_page: *per_page,
        }),
        Commands::Stats {
            snapshot,
            currency,
            from,
            to,
            json: _,
        } => commands::stats::run_with_options(StatsOptions {
            snapshot: snapshot.clone(),
            currency: currency.clone(),
            from: from.clone(),
            to: to.clone(),
        }),
        Commands::Wallet {
            snapshot,
            currency,
            json: _,
        } => commands::wallet::run_with_options(WalletOptions {
            snapshot: snapshot.clone(),
            currency: currency.clone(),
        }),
        Commands::Export {
            snapshot,
            currency,
            status,
            kind,
            from,
            to,
            search,
            all,
            page,
            per_page,
            out,
            json: _,
        } => commands::export::run_with_options(ExportOptions {
            snapshot: snapshot.clone(),
            currency: currency.clone(),
            status: status.clone(),
            kind: kind.clone(),
            from: from.clone(),
            to: to.clone(),
            search: search.clone(),
            all: *all,
            page: *page,
            per_page: *per_page,
            out_dir: out.clone(),
        }),
    }
}
