use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;

pub const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// Every fourth year, without the century exceptions.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Weekday of the first day of `month`, counted from Sunday (0) to
/// Saturday (6).
///
/// Years outside chrono's range (about ±262000) fall back to Sunday.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.weekday().num_days_from_sunday(),
        None => {
            log::warn!(
                "{}-{:02} is out of range, laying out month from Sunday",
                year,
                month
            );
            0
        }
    }
}

pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

pub fn month_abbrev(month: u32) -> &'static str {
    Month::from_u32(month).map_or("???", |m| &m.name()[..3])
}

/// Month and year preceding `month` of `year`.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
