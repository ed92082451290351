use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("theme set must contain at least one theme")]
    EmptyThemeSet,
    #[error("invalid date: year {year}, month index {month}, day {day}")]
    InvalidDate { year: i64, month: u32, day: u32 },
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}
