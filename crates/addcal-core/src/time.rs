//! Date-time parsing and the compact timestamps calendar links expect.
//!
//! Inputs are parsed into a [`DateTime<FixedOffset>`] so that a value written
//! with an offset keeps its own wall-clock time when formatted, while
//! durations are still measured on the absolute timeline. Inputs without an
//! offset are read as UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{LinkError, LinkResult};
use crate::event::EventRecord;

/// Layout of the compact timestamps used in every link (`YYYYMMDDTHHMMSS`).
const COMPACT_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Layouts carrying an explicit UTC offset.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Layouts without an offset, read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M%SZ",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Date-only layouts, read as midnight UTC.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y%m%d"];

/// Parses a date-time in any of the accepted layouts.
///
/// Accepts RFC 3339 / ISO 8601 (with `T` or a space, optional seconds,
/// fractional seconds and offset), the compact basic form, RFC 2822, slash
/// separated dates and bare dates.
///
/// # Errors
///
/// Returns [`LinkError::InvalidTimeFormat`] if no layout matches.
pub fn parse_datetime(input: &str) -> LinkResult<DateTime<FixedOffset>> {
    let s = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt);
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
        }
    }

    Err(LinkError::InvalidTimeFormat {
        input: input.to_string(),
    })
}

/// Formats a date-time as `YYYYMMDDTHHMMSS` in its own wall-clock time.
pub fn format_compact(dt: &DateTime<FixedOffset>) -> String {
    dt.format(COMPACT_FORMAT).to_string()
}

/// Parses `input` and formats it as `YYYYMMDDTHHMMSS`.
///
/// # Errors
///
/// Returns [`LinkError::InvalidTimeFormat`] if `input` cannot be parsed.
pub fn format_time(input: &str) -> LinkResult<String> {
    parse_datetime(input).map(|dt| format_compact(&dt))
}

/// Computes the compact end time of an event.
///
/// Uses the record's end when set, otherwise start plus the duration
/// (30 minutes when the duration is missing or not numeric).
///
/// # Errors
///
/// Returns [`LinkError::InvalidTimeFormat`] if the start or end cannot be
/// parsed, or the end would fall outside the representable range.
pub fn calculate_end_time(record: &EventRecord) -> LinkResult<String> {
    if record.has_end() {
        return format_time(&record.end);
    }

    let start = parse_datetime(&record.start)?;
    let minutes = record.duration_minutes();
    let end = TimeDelta::try_minutes(minutes)
        .and_then(|delta| start.checked_add_signed(delta))
        .ok_or_else(|| LinkError::InvalidTimeFormat {
            input: format!("{} + {} minutes", record.start, minutes),
        })?;

    Ok(format_compact(&end))
}

/// Computes the length of an event in whole minutes.
///
/// Without an end this is the duration (30 when not numeric). With an end it
/// is the absolute distance between start and end, truncated to minutes.
///
/// # Errors
///
/// Returns [`LinkError::InvalidTimeFormat`] if the start or end cannot be
/// parsed.
pub fn calculate_duration(record: &EventRecord) -> LinkResult<i64> {
    if !record.has_end() {
        return Ok(record.duration_minutes());
    }

    let start = parse_datetime(&record.start)?;
    let end = parse_datetime(&record.end)?;

    Ok((end.timestamp() - start.timestamp()).abs() / 60)
}

/// Formats a duration in minutes as Yahoo's `HHMM`.
///
/// Hours and minutes are each padded to two digits; hours are not capped.
/// Negative durations are clamped to `0000`.
pub fn yahoo_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}{:02}", minutes / 60, minutes % 60)
}
