//! Calendar-day handling for logged entries.
//!
//! Entries record a *day*, not an instant. Depending on which client wrote
//! the record, the stored string is one of:
//!
//! ```text
//! 2025-11-29                    calendar day, used as-is
//! 2025-11-29T04:30:00.000Z      instant with offset, converted to the caller's zone
//! 2025-11-29T23:15:00           local wall time
//! ```
//!
//! Day comparisons always use the local year/month/day of the caller's zone.
//! Converting to UTC first would move an 11pm entry onto the next day for
//! anyone west of Greenwich.
//!
//! Parsing never guesses: a malformed or impossible date is an error, and
//! every aggregate propagates it instead of bucketing the entry somewhere.

use chrono::{
    DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
    TimeZone, Utc,
};
use thiserror::Error;

use crate::enums::WeekStart;

/// Date parsing and normalization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Input is not a date or timestamp in any accepted shape.
    #[error("Malformed date '{input}': expected YYYY-MM-DD or an ISO 8601 timestamp")]
    Malformed { input: String },

    /// Well-formed digits naming a day that does not exist (e.g. February 30th).
    #[error("Invalid calendar date '{input}'")]
    InvalidCalendarDate { input: String },

    /// A wall time skipped by a daylight-saving transition in the selected zone.
    #[error("Local time {local} does not exist in the selected time zone")]
    NonexistentLocalTime { local: NaiveDateTime },
}

/// A parsed entry date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDate {
    Day(NaiveDate),
    Local(NaiveDateTime),
    Instant(DateTime<FixedOffset>),
}

impl EntryDate {
    /// Calendar day of this date as seen in `tz`.
    #[must_use]
    pub fn local_day<Tz: TimeZone>(&self, tz: &Tz) -> NaiveDate {
        match *self {
            Self::Day(day) => day,
            Self::Local(local) => local.date(),
            Self::Instant(instant) => instant.with_timezone(tz).date_naive(),
        }
    }

    /// The instant this date denotes. Bare days map to local midnight in `tz`.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::NonexistentLocalTime`] when the local wall time was
    /// skipped by a DST jump in `tz`.
    pub fn instant<Tz: TimeZone>(&self, tz: &Tz) -> Result<DateTime<Utc>, DateError> {
        match *self {
            Self::Day(day) => local_to_utc(day.and_time(NaiveTime::MIN), tz),
            Self::Local(local) => local_to_utc(local, tz),
            Self::Instant(instant) => Ok(instant.with_timezone(&Utc)),
        }
    }
}

/// Parse a stored entry date.
///
/// # Errors
///
/// [`DateError::Malformed`] for anything that is not a date or timestamp, and
/// [`DateError::InvalidCalendarDate`] for well-formed digits naming a day that
/// does not exist.
pub fn parse_entry_date(raw: &str) -> Result<EntryDate, DateError> {
    let input = raw.trim();
    let day = parse_day_prefix(input, raw)?;

    // The prefix is ten ASCII bytes, so index 10 is a char boundary.
    if input.len() == 10 {
        return Ok(EntryDate::Day(day));
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(EntryDate::Instant(instant));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(EntryDate::Local)
        .ok_or_else(|| malformed(raw))
}

/// Parse a strict `YYYY-MM-DD` calendar day (command-line `--date` values).
///
/// # Errors
///
/// Same as [`parse_entry_date`], plus [`DateError::Malformed`] when the input
/// carries a time component.
pub fn parse_calendar_day(raw: &str) -> Result<NaiveDate, DateError> {
    match parse_entry_date(raw)? {
        EntryDate::Day(day) => Ok(day),
        EntryDate::Local(_) | EntryDate::Instant(_) => Err(malformed(raw)),
    }
}

/// Calendar day of a stored date string in `tz`.
///
/// # Errors
///
/// Propagates [`parse_entry_date`] failures.
pub fn local_day<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<NaiveDate, DateError> {
    parse_entry_date(raw).map(|date| date.local_day(tz))
}

/// Inclusive instant range. A missing bound is open on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateWindow {
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Whether `instant` falls inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| instant >= start)
            && self.end.is_none_or(|end| instant <= end)
    }
}

/// First day of the week containing `day`.
#[must_use]
pub fn week_start_day(day: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = match week_start {
        WeekStart::Monday => day.weekday().num_days_from_monday(),
        WeekStart::Sunday => day.weekday().num_days_from_sunday(),
    };
    day - Days::new(u64::from(offset))
}

/// The tracking week containing `day`: local midnight of its first day
/// through the last nanosecond of its seventh day.
///
/// # Errors
///
/// Returns [`DateError::NonexistentLocalTime`] if midnight at either edge of
/// the week does not exist in `tz`.
pub fn week_bounds<Tz: TimeZone>(
    day: NaiveDate,
    week_start: WeekStart,
    tz: &Tz,
) -> Result<DateWindow, DateError> {
    let first = week_start_day(day, week_start);
    let next = first + Days::new(7);

    let start = local_to_utc(first.and_time(NaiveTime::MIN), tz)?;
    let end = local_to_utc(next.and_time(NaiveTime::MIN), tz)? - TimeDelta::nanoseconds(1);
    Ok(DateWindow::between(start, end))
}

fn local_to_utc<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> Result<DateTime<Utc>, DateError> {
    tz.from_local_datetime(&local)
        .earliest()
        .map(|resolved| resolved.with_timezone(&Utc))
        .ok_or(DateError::NonexistentLocalTime { local })
}

fn parse_day_prefix(input: &str, raw: &str) -> Result<NaiveDate, DateError> {
    let bytes = input.as_bytes();
    if bytes.len() < 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(malformed(raw));
    }
    if ![0, 1, 2, 3, 5, 6, 8, 9]
        .iter()
        .all(|&index| bytes[index].is_ascii_digit())
    {
        return Err(malformed(raw));
    }

    let year: i32 = input[0..4].parse().map_err(|_| malformed(raw))?;
    let month: u32 = input[5..7].parse().map_err(|_| malformed(raw))?;
    let day: u32 = input[8..10].parse().map_err(|_| malformed(raw))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::InvalidCalendarDate {
        input: raw.to_string(),
    })
}

fn malformed(raw: &str) -> DateError {
    DateError::Malformed {
        input: raw.to_string(),
    }
}
