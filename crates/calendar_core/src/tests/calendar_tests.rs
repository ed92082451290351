use super::*;

use chrono::{Datelike, NaiveDate};

#[test]
fn february_follows_gregorian_leap_rule() {
    assert_eq!(days_in_month(2000, 1), 29);
    assert_eq!(days_in_month(1900, 1), 28);
    assert_eq!(days_in_month(2024, 1), 29);
    assert_eq!(days_in_month(2023, 1), 28);
    assert_eq!(days_in_month(2100, 1), 28);
    assert_eq!(days_in_month(2400, 1), 29);
}

#[test]
fn non_february_months_ignore_the_year() {
    assert_eq!(days_in_month(2023, 3), 30);
    for year in [1600, 1900, 2000, 2023, 2024, -1, -400] {
        assert_eq!(days_in_month(year, 0), 31);
        assert_eq!(days_in_month(year, 3), 30);
        assert_eq!(days_in_month(year, 8), 30);
        assert_eq!(days_in_month(year, 11), 31);
    }
}

#[test]
fn leap_rule_holds_for_negative_years() {
    assert!(is_leap_year(0));
    assert!(is_leap_year(-4));
    assert!(!is_leap_year(-100));
    assert!(is_leap_year(-400));
    assert!(!is_leap_year(-1));
}

#[test]
fn normalize_carries_months_into_years() {
    assert_eq!(normalize(2024, -1), (2023, 11));
    assert_eq!(normalize(2024, 12), (2025, 0));
    assert_eq!(normalize(2024, -13), (2022, 11));
    assert_eq!(normalize(2024, 25), (2026, 1));
    assert_eq!(normalize(2024, 5), (2024, 5));
}

#[test]
fn out_of_range_months_count_days_of_the_normalized_month() {
    assert_eq!(days_in_month(2024, -11), days_in_month(2023, 1));
    assert_eq!(days_in_month(2024, 13), 29);
}

#[test]
fn first_weekday_is_invariant_under_normalization() {
    assert_eq!(first_weekday_offset(2024, -1), first_weekday_offset(2023, 11));
    assert_eq!(first_weekday_offset(2023, 12), first_weekday_offset(2024, 0));
    assert_eq!(first_weekday_offset(2000, -24), first_weekday_offset(1998, 0));
}

#[test]
fn first_weekday_matches_known_dates() {
    // 2024-01-01 was a Monday, 2023-12-01 a Friday, 2000-03-01 a Wednesday.
    assert_eq!(first_weekday_offset(2024, 0), 1);
    assert_eq!(first_weekday_offset(2023, 11), 5);
    assert_eq!(first_weekday_offset(2000, 2), 3);
    // 1970-01-01 was a Thursday.
    assert_eq!(first_weekday_offset(1970, 0), 4);
}

#[test]
fn civil_day_numbers_anchor_on_unix_epoch() {
    assert_eq!(days_from_civil(1970, 1, 1), 0);
    assert_eq!(days_from_civil(1969, 12, 31), -1);
    assert_eq!(days_from_civil(2000, 3, 1), 11_017);
}

#[test]
fn first_weekday_agrees_with_chrono_across_centuries() {
    for year in -1200..=2800 {
        for month in 0..12u32 {
            let date = NaiveDate::from_ymd_opt(year, month + 1, 1).expect("valid first of month");
            assert_eq!(
                first_weekday_offset(i64::from(year), i64::from(month)),
                date.weekday().num_days_from_sunday(),
                "{year}-{:02}",
                month + 1
            );
        }
    }
}

#[test]
fn days_in_month_agrees_with_chrono() {
    for year in 1890..=2110 {
        for month in 0..12u32 {
            let first = NaiveDate::from_ymd_opt(year, month + 1, 1).expect("first");
            let (next_year, next_month) = normalize(i64::from(year), i64::from(month) + 1);
            let next = NaiveDate::from_ymd_opt(next_year as i32, next_month + 1, 1).expect("next");
            let expected = next.signed_duration_since(first).num_days() as u32;
            assert_eq!(days_in_month(i64::from(year), i64::from(month)), expected);
        }
    }
}

#[test]
fn weekdays_repeat_every_four_centuries_up_to_the_year_bound() {
    // 400 Gregorian years are exactly 20 871 weeks.
    for month in 0..12 {
        for base in [2024, 1900, -7] {
            let expected = first_weekday_offset(base, month);
            assert_eq!(first_weekday_offset(base + MAX_YEAR, month), expected);
            assert_eq!(first_weekday_offset(base - MAX_YEAR, month), expected);
        }
    }
    assert_eq!(days_in_month(MAX_YEAR, 1), 29);
    assert_eq!(normalize(MAX_YEAR, 12), (MAX_YEAR + 1, 0));
}
