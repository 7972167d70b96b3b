use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub fn parse_iso_date(value: &str) -> Result<String, String> {
    if value.len() != 10 {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err("date must use YYYY-MM-DD format".to_string());
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return Err("date must use YYYY-MM-DD format".to_string());
        }
    }

    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err("date must use valid calendar values".to_string());
    }

    Ok(value.to_string())
}

pub fn parse_currency_code(value: &str) -> Result<String, String> {
    match value.to_ascii_uppercase().as_str() {
        "USD" | "CDF" => Ok(value.to_ascii_uppercase()),
        _ => Err("currency must be USD or CDF".to_string()),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "makuta",
    version,
    about = "wallet transaction reporting and export",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List transactions from a backend snapshot with view filters applied
    Transactions {
        /// Path to a saved backend snapshot (JSON)
        #[arg(long)]
        snapshot: String,
        /// Restrict to one currency (USD or CDF)
        #[arg(long, value_parser = parse_currency_code)]
        currency: Option<String>,
        /// Status filter (`all` disables it)
        #[arg(long)]
        status: Option<String>,
        /// Transaction type filter (`all` disables it)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Start of the creation-date window (YYYY-MM-DD, inclusive)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<String>,
        /// End of the creation-date window (YYYY-MM-DD, inclusive)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<String>,
        /// Free-text search over transaction metadata
        #[arg(long)]
        search: Option<String>,
        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Rows per page
        #[arg(long = "per-page")]
        per_page: Option<u32>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Aggregate transaction statistics by type for one currency
    Stats {
        /// Path to a saved backend snapshot (JSON)
        #[arg(long)]
        snapshot: String,
        /// Currency to aggregate (USD or CDF)
        #[arg(long, value_parser = parse_currency_code)]
        currency: String,
        /// Start date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<String>,
        /// End date filter (YYYY-MM-DD)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Show wallet balances and lifetime totals for one currency
    Wallet {
        /// Path to a saved backend snapshot (JSON)
        #[arg(long)]
        snapshot: String,
        /// Currency to show (USD or CDF)
        #[arg(long, value_parser = parse_currency_code)]
        currency: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Write filtered transactions to a dated spreadsheet file
    Export {
        /// Path to a saved backend snapshot (JSON)
        #[arg(long)]
        snapshot: String,
        /// Restrict to one currency (USD or CDF)
        #[arg(long, value_parser = parse_currency_code)]
        currency: Option<String>,
        /// Status filter (`all` disables it)
        #[arg(long)]
        status: Option<String>,
        /// Transaction type filter (`all` disables it)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Start of the creation-date window (YYYY-MM-DD, inclusive)
        #[arg(long, value_parser = parse_iso_date)]
        from: Option<String>,
        /// End of the creation-date window (YYYY-MM-DD, inclusive)
        #[arg(long, value_parser = parse_iso_date)]
        to: Option<String>,
        /// Free-text search over transaction metadata
        #[arg(long)]
        search: Option<String>,
        /// Export the entire filtered set instead of one page
        #[arg(long)]
        all: bool,
        /// Page to export when not using --all (1-based)
        #[arg(long)]
        page: Option<u32>,
        /// Rows per page when not using --all
        #[arg(long = "per-page")]
        per_page: Option<u32>,
        /// Directory to write the export file into (default: current)
        #[arg(long)]
        out: Option<String>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
pub fn parse_from<I, T>(itr: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(itr)
}
