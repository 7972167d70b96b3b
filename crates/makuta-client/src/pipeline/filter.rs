use chrono::NaiveDate;

use crate::records::TransactionRecord;

/// The user-chosen predicates applied to a working set of records. `None`
/// means "all" for every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    pub search: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterSpec {
    pub fn has_date_bound(&self) -> bool {
        self.date_from.is_some() || self.date_to.is_some()
    }

    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }
}

/// Stable AND of every predicate in the spec. Pure and order-preserving: a
/// record is kept or dropped, never re-sorted, so filtering an
/// already-filtered set with the same spec is the identity.
pub fn apply_filter(records: &[TransactionRecord], spec: &FilterSpec) -> Vec<TransactionRecord> {
    records
        .iter()
        .filter(|record| matches_record(record, spec))
        .cloned()
        .collect()
}

fn matches_record(record: &TransactionRecord, spec: &FilterSpec) -> bool {
    if let Some(search) = &spec.search {
        let needle = search.trim().to_lowercase();
        // Free-text search inspects the serialized metadata only.
        if !needle.is_empty()
            && !record
                .metadata
                .search_haystack()
                .to_lowercase()
                .contains(&needle)
        {
            return false;
        }
    }

    if let Some(status) = &spec.status
        && !record.status.eq_ignore_ascii_case(status)
    {
        return false;
    }

    if let Some(kind) = &spec.kind
        && record.kind != *kind
    {
        return false;
    }

    if spec.has_date_bound() {
        // Comparing on the date component alone makes the window
        // [date_from 00:00:00, date_to 23:59:59] inclusive. A record whose
        // date never parsed cannot be placed in the window and is excluded.
        let Some(date) = record.created_at.date() else {
            return false;
        };
        if let Some(from) = spec.date_from
            && date < from
        {
            return false;
        }
        if let Some(to) = spec.date_to
            && date > to
        {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub per_page: u32,
    pub total_count: u64,
    pub total_pages: u32,
}

/// Window one page out of a filtered set. Page numbers are 1-based; out of
/// range pages yield an empty window rather than an error. Resetting to
/// page 1 when predicates change is the caller's policy, not the filter's.
pub fn paginate<T>(items: &[T], page: u32, per_page: u32) -> (&[T], PageInfo) {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total_count = items.len() as u64;
    let total_pages = (items.len().div_ceil(per_page as usize)).max(1) as u32;

    let start = (page as usize - 1).saturating_mul(per_page as usize);
    let window = if start >= items.len() {
        &items[0..0]
    } else {
        let end = (start + per_page as usize).min(items.len());
        &items[start..end]
    };

    (
        window,
        PageInfo {
            page,
            per_page,
            total_count,
            total_pages,
        },
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::records::{
        Currency, DateStamp, Metadata, Movement, TransactionRecord,
    };

    use super::{FilterSpec, apply_filter, paginate};

    fn record(id: &str, kind: &str, status: &str, created_at: &str) -> TransactionRecord {
        TransactionRecord {
            id: id.to_string(),
            kind: kind.to_string(),
            movement: Movement::Out,
            amount: Some(50.0),
            currency: Currency::Usd,
            status: status.to_string(),
            created_at: DateStamp::parse(created_at),
            updated_at: DateStamp::missing(),
            metadata: Metadata::normalize(Some(&json!({"method": "Mobile Money"}))),
        }
    }

    fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    #[test]
    fn empty_spec_matches_everything_in_order() {
        let records = vec![
            record("1", "withdrawal", "completed", "01/03/2024"),
            record("2", "purchase", "pending", "02/03/2024"),
        ];

        let filtered = apply_filter(&records, &FilterSpec::default());
        assert_eq!(filtered, records);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            record("1", "withdrawal", "completed", "01/03/2024"),
            record("2", "purchase", "pending", "02/03/2024"),
            record("3", "withdrawal", "completed", "15/03/2024"),
        ];
        let spec = FilterSpec {
            status: Some("completed".to_string()),
            ..FilterSpec::default()
        };

        let once = apply_filter(&records, &spec);
        let twice = apply_filter(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn search_is_substring_and_case_insensitive_over_metadata() {
        let records = vec![record("1", "withdrawal", "completed", "01/03/2024")];

        for term in ["mobile", "MOBILE", "Money"] {
            let spec = FilterSpec {
                search: Some(term.to_string()),
                ..FilterSpec::default()
            };
            assert_eq!(apply_filter(&records, &spec).len(), 1, "term: {term}");
        }

        let spec = FilterSpec {
            search: Some("paypal".to_string()),
            ..FilterSpec::default()
        };
        assert!(apply_filter(&records, &spec).is_empty());
    }

    #[test]
    fn search_ignores_non_metadata_fields() {
        // `withdrawal` appears in the kind, not in the metadata.
        let records = vec![record("1", "withdrawal", "completed", "01/03/2024")];
        let spec = FilterSpec {
            search: Some("withdrawal".to_string()),
            ..FilterSpec::default()
        };
        assert!(apply_filter(&records, &spec).is_empty());
    }

    #[test]
    fn status_matches_case_insensitively() {
        let records = vec![record("1", "withdrawal", "Completed", "01/03/2024")];
        let spec = FilterSpec {
            status: Some("completed".to_string()),
            ..FilterSpec::default()
        };
        assert_eq!(apply_filter(&records, &spec).len(), 1);
    }

    #[test]
    fn date_window_is_inclusive_on_both_bounds() {
        let records = vec![
            record("from-edge", "purchase", "completed", "01/03/2024 00:00:00"),
            record("to-edge", "purchase", "completed", "31/03/2024 23:59:59"),
            record("after", "purchase", "completed", "01/04/2024 00:00:00"),
        ];
        let spec = FilterSpec {
            date_from: date(2024, 3, 1),
            date_to: date(2024, 3, 31),
            ..FilterSpec::default()
        };

        let filtered = apply_filter(&records, &spec);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["from-edge", "to-edge"]);
    }

    #[test]
    fn completed_march_withdrawal_scenario() {
        let records = vec![record("1", "withdrawal", "completed", "01/03/2024")];
        let mut spec = FilterSpec {
            status: Some("completed".to_string()),
            date_from: date(2024, 3, 1),
            date_to: date(2024, 3, 31),
            ..FilterSpec::default()
        };
        assert_eq!(apply_filter(&records, &spec).len(), 1);

        spec.date_to = date(2024, 2, 29);
        assert!(apply_filter(&records, &spec).is_empty());
    }

    #[test]
    fn unparseable_date_is_excluded_only_under_a_date_bound() {
        let records = vec![record("1", "purchase", "completed", "not a date")];

        assert_eq!(apply_filter(&records, &FilterSpec::default()).len(), 1);

        let bounded = FilterSpec {
            date_from: date(2024, 1, 1),
            ..FilterSpec::default()
        };
        assert!(apply_filter(&records, &bounded).is_empty());
    }

    #[test]
    fn pagination_windows_and_clamps() {
        let items: Vec<i32> = (1..=7).collect();

        let (window, info) = paginate(&items, 1, 3);
        assert_eq!(window, &[1, 2, 3]);
        assert_eq!(info.total_pages, 3);
        assert_eq!(info.total_count, 7);

        let (window, _) = paginate(&items, 3, 3);
        assert_eq!(window, &[7]);

        let (window, _) = paginate(&items, 9, 3);
        assert!(window.is_empty());

        let (_, info) = paginate::<i32>(&[], 1, 10);
        assert_eq!(info.total_pages, 1);
    }
}
