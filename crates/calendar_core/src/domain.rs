use chrono::{Datelike, Local, NaiveDate};

use crate::{
    calendar::{days_in_month, normalize},
    error::CalendarError,
};

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The month currently on screen. `month` is 0-indexed and always in `[0, 11]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: i64,
    month: u32,
}

impl CalendarDate {
    /// Builds a date from a possibly out-of-range month, carrying into the year.
    pub fn new(year: i64, month: i64) -> Self {
        let (year, month) = normalize(year, month);
        Self { year, month }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> u32 {
        days_in_month(self.year, i64::from(self.month))
    }

    pub fn shifted(self, months: i64) -> Self {
        Self::new(self.year, i64::from(self.month) + months)
    }

    /// Header text, e.g. `2024 - 3` for March 2024.
    pub fn header_label(&self) -> String {
        format!("{} - {}", self.year, self.month + 1)
    }
}

impl From<TodayMarker> for CalendarDate {
    fn from(value: TodayMarker) -> Self {
        Self {
            year: value.year,
            month: value.month,
        }
    }
}

/// The real-world local date, captured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodayMarker {
    year: i64,
    month: u32,
    day: u32,
}

impl TodayMarker {
    pub fn new(year: i64, month: u32, day: u32) -> Result<Self, CalendarError> {
        if month > 11 || day == 0 || day > days_in_month(year, i64::from(month)) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    pub fn capture() -> Self {
        Self::from_naive_date(Local::now().date_naive())
    }

    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self {
            year: i64::from(date.year()),
            month: date.month0(),
            day: date.day(),
        }
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_in(&self, date: CalendarDate) -> bool {
        self.year == date.year() && self.month == date.month()
    }

    pub fn matches(&self, date: CalendarDate, day: u32) -> bool {
        self.is_in(date) && self.day == day
    }
}
