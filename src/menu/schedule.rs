//! Parse a sheet export into a rotation of weekly menus
//!
//! The sheet is a flat list of `[day, lunch, dinner]` rows with no
//! explicit week markers. A new week starts whenever a day shows up
//! that the week being read already has.

use std::collections::HashMap;

use chrono::Weekday;
use serde::Serialize;
use serde_json::{Map, Value};

use super::csv::records;
use super::weekday::{DAY_NAMES, parse_day_name};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DayMeals {
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl DayMeals {
    pub fn new(lunch: Option<&str>, dinner: Option<&str>) -> Self {
        Self {
            lunch: non_blank(lunch),
            dinner: non_blank(dinner),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekSchedule {
    days: HashMap<Weekday, DayMeals>,
}

impl WeekSchedule {
    pub fn get(&self, day: Weekday) -> Option<&DayMeals> {
        self.days.get(&day)
    }

    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains_key(&day)
    }

    pub fn insert(&mut self, day: Weekday, meals: DayMeals) {
        self.days.insert(day, meals);
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// JSON object keyed by Spanish day name, Monday first.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for (day, name) in DAY_NAMES.iter() {
            if let Some(meals) = self.days.get(day) {
                out.insert(name.to_string(), serde_json::json!(meals));
            }
        }
        Value::Object(out)
    }
}

/// Every week parsed from one fetch of the sheet, in sheet order.
pub type Schedule = Vec<WeekSchedule>;

/// Accumulates rows into weeks.
///
/// Holds the week currently being filled. Pushing a day that week
/// already contains closes it and opens a new one, so
/// `lunes, martes, lunes` yields two weeks and `lunes, lunes` does
/// too.
#[derive(Debug, Default)]
pub struct WeekAccumulator {
    weeks: Schedule,
    current: WeekSchedule,
}

impl WeekAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, day: Weekday, meals: DayMeals) {
        if self.current.contains(day) {
            let done = std::mem::take(&mut self.current);
            self.weeks.push(done);
        }
        self.current.insert(day, meals);
    }

    pub fn finish(mut self) -> Schedule {
        if !self.current.is_empty() {
            self.weeks.push(self.current);
        }
        self.weeks
    }
}

/// Parses the CSV export of the menu sheet.
///
/// The first record is the header, whatever its shape. Records with
/// fewer than three fields or whose first field isn't a weekday are
/// ignored, so titles and blank separator rows in the sheet are fine.
/// Never fails; a sheet with no day rows gives an empty schedule.
pub fn parse(raw: &str) -> Schedule {
    let mut acc = WeekAccumulator::new();

    for row in records(raw)
        .into_iter()
        .skip(1)
        .filter(|row| row.len() >= 3)
    {
        let Some(day) = parse_day_name(&row[0]) else {
            continue;
        };
        acc.push(day, DayMeals::new(Some(&row[1]), Some(&row[2])));
    }

    let weeks = acc.finish();
    tracing::debug!("Parsed {} week(s) from sheet", weeks.len());
    weeks
}
