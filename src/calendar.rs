use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Sunday-to-Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekRange {
    pub const CAPTION_FORMAT: &'static str = "%m/%d/%Y";

    /// The week that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let start = Self::previous_sunday(date);
        Self {
            start,
            end: start + Duration::days(6),
        }
    }

    /// `date` itself when it is a Sunday, otherwise the Sunday before it.
    fn previous_sunday(date: NaiveDate) -> NaiveDate {
        date - Duration::days(date.weekday().num_days_from_sunday() as i64)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn day(&self, weekday: Weekday) -> NaiveDate {
        self.start + Duration::days(weekday.num_days_from_sunday() as i64)
    }

    /// `MM/DD/YYYY - MM/DD/YYYY`
    pub fn caption(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(Self::CAPTION_FORMAT),
            self.end.format(Self::CAPTION_FORMAT)
        )
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.caption())
    }
}
