use std::path::Path;

use chrono::NaiveDate;

use crate::contracts::types::FilterEcho;
use crate::error::{ClientError, ClientResult};
use crate::pipeline::FilterSpec;
use crate::records::Currency;
use crate::snapshot::SnapshotBackend;

pub(crate) fn open_snapshot(path: &str) -> ClientResult<SnapshotBackend> {
    SnapshotBackend::open(Path::new(path))
}

pub(crate) fn parse_currency_arg(value: &str, command: &str) -> ClientResult<Currency> {
    Currency::parse(value).ok_or_else(|| {
        ClientError::invalid_argument_for_command(
            &format!("`{value}` is not a supported currency. Use USD or CDF."),
            Some(command),
        )
    })
}

/// `all` and blank values mean "no filter", matching the view's selector
/// defaults.
pub(crate) fn normalize_choice(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("all") {
        return None;
    }
    Some(value.to_string())
}

pub(crate) fn parse_date_bound(
    value: Option<&str>,
    field_name: &str,
    command: &str,
) -> ClientResult<Option<NaiveDate>> {
    let Some(value) = value else {
        return Ok(None);
    };

    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map(Some)
        .map_err(|_| {
            ClientError::invalid_argument_for_command(
                &format!("`{field_name}` must use YYYY-MM-DD format with a real calendar date."),
                Some(command),
            )
        })
}

pub(crate) fn build_filter_spec(
    search: Option<&str>,
    status: Option<&str>,
    kind: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    command: &str,
) -> ClientResult<FilterSpec> {
    let date_from = parse_date_bound(from, "from", command)?;
    let date_to = parse_date_bound(to, "to", command)?;

    if let (Some(start), Some(end)) = (date_from, date_to)
        && start > end
    {
        return Err(ClientError::invalid_argument_for_command(
            "Invalid date range: `from` must be on or before `to`.",
            Some(command),
        ));
    }

    Ok(FilterSpec {
        search: normalize_choice(search),
        status: normalize_choice(status),
        kind: normalize_choice(kind),
        date_from,
        date_to,
    })
}

pub(crate) fn filter_echo(currency: Option<Currency>, spec: &FilterSpec) -> FilterEcho {
    FilterEcho {
        currency: currency.map(|value| value.as_str().to_string()),
        status: spec.status.clone(),
        kind: spec.kind.clone(),
        date_from: spec.date_from.map(|date| date.format("%Y-%m-%d").to_string()),
        date_to: spec.date_to.map(|date| date.format("%Y-%m-%d").to_string()),
        search: spec.search.clone(),
    }
}
