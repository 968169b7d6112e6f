use std::env;

use chrono::{FixedOffset, NaiveDate, Offset, Utc};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub sheet_csv_url: String,
    pub utc_offset_hours: i32,
    // Pins "today" to a fixed date instead of the clock
    pub today_override: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let sheet_csv_url =
            env::var("MENU_SHEET_CSV_URL").expect("Missing env var MENU_SHEET_CSV_URL");
        let utc_offset_hours = env::var("MENU_UTC_OFFSET_HOURS")
            .ok()
            .and_then(|v| v.parse::<i32>().ok())
            .unwrap_or(0);
        let today_override = env::var("MENU_TODAY")
            .ok()
            .and_then(|v| NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").ok());

        Self {
            sheet_csv_url,
            utc_offset_hours,
            today_override,
        }
    }
}

impl AppConfig {
    /// The current date in the configured offset, unless pinned.
    pub fn today(&self) -> NaiveDate {
        if let Some(today) = self.today_override {
            return today;
        }
        let offset = self
            .utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix());
        Utc::now().with_timezone(&offset).date_naive()
    }
}
