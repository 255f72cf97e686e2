use std::cmp::Reverse;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use humane_core::dates::DateError;
use humane_core::enums::ZoneSetting;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EntriesArgs;
use crate::context::AppContext;
use crate::output::output;

/// One row of `humane entries`.
#[derive(Debug, Serialize, PartialEq)]
pub struct EntryRow {
    pub id: String,
    pub date: NaiveDate,
    pub value: f64,
    pub created_at: Option<DateTime<Utc>>,
}

/// Handle `humane entries <habit-id>`.
pub fn handle(args: &EntriesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let habit = ctx.snapshot.require_habit(&args.habit_id)?;
    tracing::debug!(habit = %habit.name, "listing entries");

    let rows = match ctx.config.tracker.time_zone {
        ZoneSetting::Local => rows(ctx, &args.habit_id, &Local)?,
        ZoneSetting::Utc => rows(ctx, &args.habit_id, &Utc)?,
    };
    output(&rows, flags.format)
}

/// Entries for `habit_id`, newest day first, later `createdAt` first within a day.
fn rows<Tz: TimeZone>(
    ctx: &AppContext,
    habit_id: &str,
    tz: &Tz,
) -> Result<Vec<EntryRow>, DateError> {
    let mut rows = ctx
        .snapshot
        .entries_for_habit(habit_id)
        .into_iter()
        .map(|entry| {
            Ok(EntryRow {
                id: entry.id.clone(),
                date: entry.parsed_date()?.local_day(tz),
                value: entry.value,
                created_at: entry.created_at,
            })
        })
        .collect::<Result<Vec<_>, DateError>>()?;
    rows.sort_by_key(|row| Reverse((row.date, row.created_at)));
    Ok(rows)
}
