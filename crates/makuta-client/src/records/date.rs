use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// One normalized timestamp from the backend. The backend emits a mix of
/// ISO-8601 and day-first `DD/MM/YYYY[ HH:MM:SS]` strings; both land here.
/// Parsing is total: an unrecognizable value keeps its raw text and simply
/// carries no parsed instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp {
    raw: String,
    parsed: Option<ParsedStamp>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedStamp {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

impl DateStamp {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let parsed = if trimmed.contains('/') {
            parse_day_first(trimmed)
        } else {
            parse_iso(trimmed)
        };

        Self {
            raw: raw.to_string(),
            parsed,
        }
    }

    pub fn missing() -> Self {
        Self {
            raw: String::new(),
            parsed: None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Date component only. Range filters compare on this; time-of-day is
    /// informational.
    pub fn date(&self) -> Option<NaiveDate> {
        self.parsed.map(|stamp| stamp.date)
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.parsed.and_then(|stamp| stamp.time)
    }

    /// Display form: `DD/MM/YYYY HH:MM` when a time is known, `DD/MM/YYYY`
    /// otherwise. An unparseable stamp falls back to its raw text.
    pub fn display(&self) -> String {
        let Some(stamp) = self.parsed else {
            return self.raw.clone();
        };

        match stamp.time {
            Some(time) => format!(
                "{} {}",
                stamp.date.format("%d/%m/%Y"),
                time.format("%H:%M")
            ),
            None => stamp.date.format("%d/%m/%Y").to_string(),
        }
    }
}

fn parse_day_first(value: &str) -> Option<ParsedStamp> {
    let mut segments = value.splitn(3, '/');
    let day = segments.next()?.trim().parse::<u32>().ok()?;
    let month = segments.next()?.trim().parse::<u32>().ok()?;
    let rest = segments.next()?.trim();

    // The third segment may carry a time after a space: `2024 14:05:30`.
    let (year_text, time_text) = match rest.split_once(' ') {
        Some((year, time)) => (year, Some(time.trim())),
        None => (rest, None),
    };

    let year = year_text.trim().parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = time_text.and_then(parse_time_of_day);

    Some(ParsedStamp { date, time })
}

fn parse_iso(value: &str) -> Option<ParsedStamp> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        let naive = instant.naive_local();
        return Some(ParsedStamp {
            date: naive.date(),
            time: Some(naive.time()),
        });
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ParsedStamp {
                date: naive.date(),
                time: Some(naive.time()),
            });
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(ParsedStamp { date, time: None });
    }

    None
}

fn parse_time_of_day(value: &str) -> Option<NaiveTime> {
    for format in ["%H:%M:%S", "%H:%M"] {
        if let Ok(time) = NaiveTime::parse_from_str(value, format) {
            return Some(time);
        }
    }
    None
}
