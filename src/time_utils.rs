// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting and calendar-day windows.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};

use crate::db::TimeWindow;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Instant of local midnight at the start of `date` in `tz`.
///
/// If midnight does not exist locally (DST jump at 00:00) the first
/// instant after the gap is used.
pub fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&naive).earliest() {
        Some(dt) => dt.with_timezone(&Utc),
        None => {
            let after_gap = naive + Duration::hours(1);
            tz.from_local_datetime(&after_gap)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
        }
    }
}

/// `[midnight, next midnight)` for `date` in `tz`.
pub fn day_window_exclusive<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> TimeWindow {
    let next = date.succ_opt().unwrap_or(date);
    TimeWindow::half_open(local_midnight(tz, date), local_midnight(tz, next))
}

/// `[00:00:00.000, 23:59:59.999]` for `date` in `tz`.
pub fn day_window_inclusive<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> TimeWindow {
    let start = local_midnight(tz, date);
    let last_ms = date
        .and_hms_milli_opt(23, 59, 59, 999)
        .and_then(|naive| tz.from_local_datetime(&naive).latest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| start + Duration::days(1) - Duration::milliseconds(1));
    TimeWindow::closed(start, last_ms)
}

/// Short English weekday name ("Mon", "Tue", ...).
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Parse a `?date=` value: either `YYYY-MM-DD` or an RFC3339 timestamp,
/// the latter converted to `tz` before taking its calendar date.
pub fn parse_query_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(tz).date_naive())
}
