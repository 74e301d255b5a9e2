use crate::error::CoreError;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Parses a strict `DD.MM.YYYY` string: zero-padded day and month, four-digit year.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || CoreError::InvalidBirthday(raw.to_string());
    let bytes = raw.as_bytes();
    if bytes.len() != 10 {
        return Err(invalid());
    }
    let shape_ok = bytes.iter().enumerate().all(|(idx, b)| match idx {
        2 | 5 => *b == b'.',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The date `month`/`day` falls on in `year`. 29 February maps to
/// 28 February in non-leap years.
pub fn anniversary_in_year(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First date strictly after `start` that falls on `weekday`.
pub fn find_next_weekday(start: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut days_ahead = i64::from(weekday.num_days_from_monday())
        - i64::from(start.weekday().num_days_from_monday());
    if days_ahead <= 0 {
        days_ahead += 7;
    }
    start + Duration::days(days_ahead)
}

pub fn adjust_for_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => find_next_weekday(date, Weekday::Mon),
        _ => date,
    }
}
