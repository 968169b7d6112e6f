//! Pick the day's meals from a schedule and phrase them

use chrono::{Datelike, NaiveDate};

use super::resolve::ResolvedQuery;
use super::schedule::{DayMeals, Schedule, WeekSchedule};

/// The week in effect for `date`.
///
/// The sheet is treated as a rotation that repeats every
/// `schedule.len()` weeks, phased by ISO week number.
pub fn week_for(date: NaiveDate, schedule: &Schedule) -> Option<&WeekSchedule> {
    if schedule.is_empty() {
        return None;
    }
    let idx = date.iso_week().week() as usize % schedule.len();
    schedule.get(idx)
}

pub fn meals_for(date: NaiveDate, schedule: &Schedule) -> DayMeals {
    week_for(date, schedule)
        .and_then(|week| week.get(date.weekday()))
        .cloned()
        .unwrap_or_default()
}

pub fn render(day_name: &str, meals: &DayMeals) -> String {
    match (&meals.lunch, &meals.dinner) {
        (Some(lunch), Some(dinner)) => {
            format!("El {day_name}, de comida hay {lunch} y de cena {dinner}")
        }
        (Some(lunch), None) => {
            format!("El {day_name}, de comida hay {lunch}. No hay cena planificada")
        }
        (None, Some(dinner)) => {
            format!("El {day_name}, no hay comida planificada, pero de cena hay {dinner}")
        }
        (None, None) => format!("El {day_name} no hay nada planificado"),
    }
}

/// Sentence describing what's planned on `date`.
pub fn compose(date: NaiveDate, schedule: &Schedule) -> String {
    let query = ResolvedQuery::new(date);
    tracing::debug!(
        "Composing menu for {} ({}, ISO week {})",
        query.date,
        query.day_name,
        query.iso_week
    );
    render(query.day_name, &meals_for(query.date, schedule))
}
