use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Number of days reported when no delivery deadline can be determined.
pub const NO_DEADLINE_DAYS: i64 = 999;

/// Parses a stored date value into a canonical instant.
///
/// The data layer mixes ISO-8601 strings (with and without time or offset)
/// with a day-first `DD/MM/YYYY` form captured by older entry screens.
/// Returns `None` when the value is absent or unparseable; callers treat
/// that as "unknown" (far-future for risk math, excluded for bucketing).
pub fn normalize(raw: Option<&str>) -> Option<NaiveDateTime> {
    let text = raw?.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    for format in ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Day-granularity view of [`normalize`], for deadline arithmetic.
pub fn normalize_day(raw: Option<&str>) -> Option<NaiveDate> {
    normalize(raw).map(|dt| dt.date())
}

/// Whole days from `today` to `target`, both midnight-normalized, so the
/// delivery day itself compares as zero regardless of time-of-day.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}
