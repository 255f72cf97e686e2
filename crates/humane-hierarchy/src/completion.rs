//! Day-level completion for a tag.

use chrono::{NaiveDate, TimeZone};
use humane_core::dates::DateError;
use humane_core::entities::{Entry, Habit, HabitsById};

use crate::aggregate::tag_entries;

/// Whether `tag` is done on `day`.
///
/// One entry on the tag itself or on any descendant raw habit is enough; the
/// other descendants may be skipped. Days are compared as local calendar
/// days in `tz`.
///
/// # Errors
///
/// Propagates the [`DateError`] of the first unreadable entry date met before
/// a match is found.
pub fn is_tag_completed_for_day<Tz: TimeZone>(
    tag: &Habit,
    habits: &HabitsById,
    entries: &[Entry],
    day: NaiveDate,
    tz: &Tz,
) -> Result<bool, DateError> {
    for entry in tag_entries(tag, habits, entries) {
        if entry.parsed_date()?.local_day(tz) == day {
            return Ok(true);
        }
    }
    Ok(false)
}
