//! Resolve a spoken day expression to a calendar date
//!
//! The voice platform's date slot can carry a full date
//! (`2026-02-17`), an ISO week (`2026-W08`) or, when the user's
//! phrasing doesn't map to a date, the raw word they said
//! (`viernes`).

use std::sync::LazyLock;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use regex::Regex;

use super::weekday::{day_name_of, parse_day_name};

static ISO_WEEK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-W(\d{1,2})$").unwrap());

/// A date picked for a query along with what's needed to look it up
/// in a schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    pub date: NaiveDate,
    pub day_name: &'static str,
    pub iso_week: u32,
}

impl ResolvedQuery {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_name: day_name_of(date),
            iso_week: date.iso_week().week(),
        }
    }
}

fn parse_iso_week(expr: &str) -> Option<NaiveDate> {
    let caps = ISO_WEEK_RE.captures(expr)?;
    let year = caps[1].parse::<i32>().ok()?;
    let week = caps[2].parse::<u32>().ok()?;
    NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
}

/// Date of the next `target` strictly after `today`. Naming today's
/// weekday means the same day next week.
pub fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let from = today.weekday().num_days_from_monday();
    let to = target.num_days_from_monday();
    let ahead = match (7 + to - from) % 7 {
        0 => 7,
        n => n,
    };
    today + Days::new(ahead as u64)
}

/// Resolves `expr` relative to `today`.
///
/// Tried in order: empty, `YYYY-MM-DD`, `YYYY-Www` (Monday of that
/// week), weekday name. Anything else resolves to `today`.
pub fn resolve(expr: Option<&str>, today: NaiveDate) -> NaiveDate {
    let expr = match expr.map(str::trim) {
        Some(e) if !e.is_empty() => e,
        _ => return today,
    };

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return date;
    }

    if let Some(monday) = parse_iso_week(expr) {
        return monday;
    }

    if let Some(day) = parse_day_name(expr) {
        return next_weekday(today, day);
    }

    tracing::debug!("Unrecognized day expression {:?}, using today", expr);
    today
}
