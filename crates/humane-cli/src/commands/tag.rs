use anyhow::{Context, bail};
use chrono::{Days, Local, NaiveDate, TimeZone, Utc};
use humane_core::dates::{parse_calendar_day, week_bounds, week_start_day};
use humane_core::entities::Habit;
use humane_core::enums::ZoneSetting;
use humane_core::responses::{HabitSummary, TagStatusResponse, TagWeekResponse};
use humane_hierarchy::{descendant_raw_habits, is_tag_completed_for_day, tag_weekly_count};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `humane tag`.
pub fn handle(action: &TagCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.config.tracker.time_zone {
        ZoneSetting::Local => handle_in(action, ctx, flags, &Local),
        ZoneSetting::Utc => handle_in(action, ctx, flags, &Utc),
    }
}

fn handle_in<Tz: TimeZone>(
    action: &TagCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
    tz: &Tz,
) -> anyhow::Result<()> {
    match action {
        TagCommands::Status { id, date } => {
            let day = resolve_day(date.as_deref(), tz)?;
            output(&status(ctx, id, day, tz)?, flags.format)
        }
        TagCommands::Week { id, date } => {
            let day = resolve_day(date.as_deref(), tz)?;
            output(&week(ctx, id, day, tz)?, flags.format)
        }
        TagCommands::Descendants { id } => output(&descendants(ctx, id)?, flags.format),
    }
}

fn status<Tz: TimeZone>(
    ctx: &AppContext,
    id: &str,
    day: NaiveDate,
    tz: &Tz,
) -> anyhow::Result<TagStatusResponse> {
    let tag = require_tag(ctx, id)?;
    let index = ctx.snapshot.index();

    let completed = is_tag_completed_for_day(tag, index, ctx.snapshot.entries(), day, tz)
        .with_context(|| format!("failed to evaluate tag '{id}' for {day}"))?;
    let descendants = descendant_raw_habits(tag, index)
        .into_iter()
        .map(|habit| ctx.snapshot.habit_name(&habit.id).to_string())
        .collect();

    Ok(TagStatusResponse {
        habit_id: tag.id.clone(),
        name: ctx.snapshot.habit_name(&tag.id).to_string(),
        date: day,
        completed,
        descendants,
    })
}

fn week<Tz: TimeZone>(
    ctx: &AppContext,
    id: &str,
    day: NaiveDate,
    tz: &Tz,
) -> anyhow::Result<TagWeekResponse> {
    let tag = require_tag(ctx, id)?;
    let week_starts_on = ctx.config.tracker.week_starts_on;

    let window = week_bounds(day, week_starts_on, tz)?;
    let days_with_activity = tag_weekly_count(
        tag,
        ctx.snapshot.index(),
        ctx.snapshot.entries(),
        window,
        tz,
    )
    .with_context(|| format!("failed to count week activity for tag '{id}'"))?;

    let week_start = week_start_day(day, week_starts_on);
    Ok(TagWeekResponse {
        habit_id: tag.id.clone(),
        name: ctx.snapshot.habit_name(&tag.id).to_string(),
        week_start,
        week_end: week_start + Days::new(6),
        days_with_activity,
        target_per_week: tag.target_per_week,
        target_met: days_with_activity >= usize::from(tag.target_per_week),
    })
}

fn descendants(ctx: &AppContext, id: &str) -> anyhow::Result<Vec<HabitSummary>> {
    let tag = require_tag(ctx, id)?;
    let snapshot = &ctx.snapshot;

    let mut rows: Vec<HabitSummary> = descendant_raw_habits(tag, snapshot.index())
        .into_iter()
        .map(|habit| HabitSummary {
            id: habit.id.clone(),
            name: snapshot.habit_name(&habit.id).to_string(),
            habit_type: habit.habit_type,
            category: habit
                .category
                .clone()
                .unwrap_or_else(|| humane_backup::UNCATEGORIZED.to_string()),
            target_per_week: habit.target_per_week,
            entry_count: snapshot.entries_for_habit(&habit.id).len(),
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

fn require_tag<'a>(ctx: &'a AppContext, id: &str) -> anyhow::Result<&'a Habit> {
    let habit = ctx.snapshot.require_habit(id)?;
    if !habit.is_tag() {
        bail!("habit '{id}' is a raw habit, not a tag");
    }
    Ok(habit)
}

/// `--date` if given, otherwise today in `tz`.
fn resolve_day<Tz: TimeZone>(date: Option<&str>, tz: &Tz) -> anyhow::Result<NaiveDate> {
    match date {
        Some(raw) => parse_calendar_day(raw).with_context(|| format!("invalid --date '{raw}'")),
        None => Ok(Utc::now().with_timezone(tz).date_naive()),
    }
}
