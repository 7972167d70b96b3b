pub mod date;
pub mod metadata;
pub mod money;
pub mod parse;

use serde::Serialize;

pub use date::DateStamp;
pub use metadata::Metadata;

/// The two currencies the platform settles in. A record belongs to exactly
/// one; views never sum across them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Cdf,
}

impl Currency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Cdf => "CDF",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Some(Self::Usd),
            "CDF" => Some(Self::Cdf),
            _ => None,
        }
    }
}

/// Direction of a transaction: `in` credits the wallet, `out` debits it.
/// The stored amount is a magnitude; direction alone decides the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    In,
    Out,
}

impl Movement {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }
}

/// One transaction entry as returned by the backend, normalized for the
/// client-side pipeline. `kind` and `status` are open-ended string codes:
/// known values get display labels, unrecognized ones pass through
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub kind: String,
    pub movement: Movement,
    pub amount: Option<f64>,
    pub currency: Currency,
    pub status: String,
    pub created_at: DateStamp,
    pub updated_at: DateStamp,
    pub metadata: Metadata,
}

/// Pre-aggregated backend summary of the transactions sharing one kind and
/// one currency.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub kind: String,
    pub currency: Currency,
    pub total_amount: f64,
    pub count: i64,
    pub first_transaction: Option<String>,
    pub last_transaction: Option<String>,
}

/// Current balances for one currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletSummary {
    pub currency: Currency,
    pub balance: f64,
    pub total_earned: f64,
    pub total_withdrawn: f64,
}
