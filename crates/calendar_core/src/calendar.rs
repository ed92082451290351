//! Proleptic Gregorian calendar arithmetic.
//!
//! Months are 0-indexed (0 = January) and weekdays count from Sunday
//! (0 = Sunday .. 6 = Saturday). Out-of-range months are folded into the
//! neighbouring years first.
//!
//! Results are exact for years within `±MAX_YEAR`. Beyond that the
//! day-number arithmetic would overflow `i64`.

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days between 0000-03-01 and 1970-01-01 in the civil day-number scheme.
const UNIX_EPOCH_SHIFT: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

/// Largest supported year magnitude for the civil day-number transform.
pub const MAX_YEAR: i64 = 1_000_000_000_000_000;

pub const MONTHS_PER_YEAR: i64 = 12;
pub const DAYS_PER_WEEK: u32 = 7;

pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Folds a possibly out-of-range month into `[0, 11]`, carrying into the year.
///
/// `normalize(2024, -1)` is `(2023, 11)` and `normalize(2024, 12)` is `(2025, 0)`.
pub fn normalize(year: i64, month: i64) -> (i64, u32) {
    let year = year + month.div_euclid(MONTHS_PER_YEAR);
    let month = month.rem_euclid(MONTHS_PER_YEAR) as u32;
    (year, month)
}

pub fn days_in_month(year: i64, month: i64) -> u32 {
    let (year, month) = normalize(year, month);
    if month == 1 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Weekday of the first day of `month`, 0 = Sunday.
pub fn first_weekday_offset(year: i64, month: i64) -> u32 {
    let (year, month) = normalize(year, month);
    weekday_from_days(days_from_civil(year, month + 1, 1))
}

/// Days since 1970-01-01 for a civil date with a 1-indexed month and day.
///
/// Shifts the year to start in March so the leap day is the last day of the
/// computational year, then counts whole 400-year eras.
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let month = i64::from(month);
    let day = i64::from(day);
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let shifted_month = if month > 2 { month - 3 } else { month + 9 };
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_SHIFT
}

/// 1970-01-01 was a Thursday.
pub fn weekday_from_days(days: i64) -> u32 {
    (days + 4).rem_euclid(i64::from(DAYS_PER_WEEK)) as u32
}

#[cfg(test)]
#[path = "tests/calendar_tests.rs"]
mod tests;
