//! Distinct active days for a tag, compared against `targetPerWeek`.

use std::collections::HashSet;

use chrono::TimeZone;
use humane_core::dates::{DateError, DateWindow};
use humane_core::entities::{Entry, Habit, HabitsById};

use crate::aggregate::tag_entries;

/// Number of distinct local calendar days on which `tag` has at least one
/// entry inside `window`.
///
/// Several entries on one day, or entries on several descendants that day,
/// count once. Window membership uses the entry's instant (bare days sit at
/// local midnight in `tz`); bucketing uses its local day. An unbounded
/// window counts every day ever logged.
///
/// # Errors
///
/// Propagates the [`DateError`] of any unreadable entry date.
pub fn tag_weekly_count<Tz: TimeZone>(
    tag: &Habit,
    habits: &HabitsById,
    entries: &[Entry],
    window: DateWindow,
    tz: &Tz,
) -> Result<usize, DateError> {
    let mut days = HashSet::new();

    for entry in tag_entries(tag, habits, entries) {
        let date = entry.parsed_date()?;
        if !window.is_unbounded() && !window.contains(date.instant(tz)?) {
            continue;
        }
        days.insert(date.local_day(tz));
    }

    tracing::debug!(tag_id = %tag.id, days = days.len(), "counted active days");
    Ok(days.len())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
    use humane_core::dates::week_bounds;
    use humane_core::entities::Entry;
    use humane_core::enums::WeekStart;
    use rstest::rstest;

    use super::*;
    use crate::fixtures;

    fn week_of_24th() -> DateWindow {
        week_bounds(
            NaiveDate::from_ymd_opt(2025, 11, 24).unwrap(),
            WeekStart::Monday,
            &Utc,
        )
        .unwrap()
    }

    #[test]
    fn no_entries_counts_zero() {
        let habits = fixtures::nested();
        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &[], week_of_24th(), &Utc).unwrap(),
            0
        );
    }

    #[test]
    fn same_day_entries_across_descendants_count_once() {
        let habits = fixtures::nested();
        let entries = vec![
            Entry::new("e1", "yoga", "2025-11-25"),
            Entry::new("e2", "walk", "2025-11-25"),
            Entry::new("e3", "walk", "2025-11-25T18:00:00Z"),
            Entry::new("e4", "move", "2025-11-25"),
        ];
        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &entries, week_of_24th(), &Utc).unwrap(),
            1
        );
    }

    #[rstest]
    #[case("2025-11-23", 0)]
    #[case("2025-11-24", 1)]
    #[case("2025-11-30", 1)]
    #[case("2025-11-30T23:59:59Z", 1)]
    #[case("2025-12-01", 0)]
    fn window_edges_are_inclusive(#[case] date: &str, #[case] expected: usize) {
        let habits = fixtures::nested();
        let entries = vec![Entry::new("e1", "swim", date)];
        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &entries, week_of_24th(), &Utc).unwrap(),
            expected
        );
    }

    fn instant(raw: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(raw).unwrap().with_timezone(&Utc)
    }

    #[rstest]
    #[case::start_only(Some("2025-11-24T00:00:00Z"), None, 2)]
    #[case::end_only(None, Some("2025-11-24T00:00:00Z"), 3)]
    fn half_open_window_counts_the_open_side(
        #[case] start: Option<&str>,
        #[case] end: Option<&str>,
        #[case] expected: usize,
    ) {
        let habits = fixtures::nested();
        let entries = vec![
            Entry::new("e1", "yoga", "2025-11-20"),
            Entry::new("e2", "walk", "2025-11-23"),
            Entry::new("e3", "swim", "2025-11-24"),
            Entry::new("e4", "yoga", "2025-12-05"),
        ];
        let window = DateWindow {
            start: start.map(instant),
            end: end.map(instant),
        };

        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &entries, window, &Utc).unwrap(),
            expected
        );
    }

    #[test]
    fn unbounded_window_counts_all_days() {
        let habits = fixtures::nested();
        let entries = vec![
            Entry::new("e1", "yoga", "2025-01-01"),
            Entry::new("e2", "yoga", "2025-06-01"),
            Entry::new("e3", "swim", "2025-06-01"),
        ];
        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &entries, DateWindow::unbounded(), &Utc)
                .unwrap(),
            2
        );
    }

    #[test]
    fn buckets_by_local_day() {
        let habits = fixtures::nested();
        // Both are the 25th in UTC-8 but fall on two UTC days.
        let entries = vec![
            Entry::new("e1", "yoga", "2025-11-25T10:00:00-08:00"),
            Entry::new("e2", "walk", "2025-11-26T07:30:00Z"),
        ];
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();

        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &entries, DateWindow::unbounded(), &pacific)
                .unwrap(),
            1
        );
        assert_eq!(
            tag_weekly_count(&habits["move"], &habits, &entries, DateWindow::unbounded(), &Utc)
                .unwrap(),
            2
        );
    }

    #[test]
    fn malformed_date_is_propagated() {
        let habits = fixtures::nested();
        let entries = vec![
            Entry::new("e1", "yoga", "2025-11-25"),
            Entry::new("e2", "walk", "last tuesday"),
        ];
        let result = tag_weekly_count(&habits["move"], &habits, &entries, week_of_24th(), &Utc);
        assert!(matches!(result, Err(DateError::Malformed { .. })));
    }
}
