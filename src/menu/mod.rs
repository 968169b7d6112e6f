pub mod csv;
pub mod resolve;
pub mod schedule;
pub mod source;
pub mod speech;
pub mod weekday;

pub use resolve::{ResolvedQuery, resolve};
pub use schedule::{DayMeals, Schedule, WeekSchedule, parse};
pub use source::{MenuSource, SheetCsvSource};
pub use speech::compose;
