//! Spanish weekday names and label normalization

use chrono::{Datelike, NaiveDate, Weekday};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Weekday names as they appear in the sheet and in spoken
/// responses, Monday first.
pub static DAY_NAMES: [(Weekday, &str); 7] = [
    (Weekday::Mon, "lunes"),
    (Weekday::Tue, "martes"),
    (Weekday::Wed, "miércoles"),
    (Weekday::Thu, "jueves"),
    (Weekday::Fri, "viernes"),
    (Weekday::Sat, "sábado"),
    (Weekday::Sun, "domingo"),
];

/// Strips accent marks and lower-cases `text` so that "Miércoles",
/// "miercoles" and "MIÉRCOLES" all compare equal.
pub fn normalize(text: &str) -> String {
    text.trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Matches a free-form label against the seven weekday names.
pub fn parse_day_name(label: &str) -> Option<Weekday> {
    let needle = normalize(label);
    if needle.is_empty() {
        return None;
    }
    DAY_NAMES
        .iter()
        .find(|(_, name)| normalize(name) == needle)
        .map(|(day, _)| *day)
}

pub fn day_name(day: Weekday) -> &'static str {
    DAY_NAMES[day.num_days_from_monday() as usize].1
}

pub fn day_name_of(date: NaiveDate) -> &'static str {
    day_name(date.weekday())
}
