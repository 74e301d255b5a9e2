use crate::rules::dates::{adjust_for_weekend, anniversary_in_year};
use chrono::{Datelike, NaiveDate};

/// Next occurrence of `born` on or after `today`.
pub fn next_occurrence(born: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in_year(born.month(), born.day(), today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    anniversary_in_year(born.month(), born.day(), today.year() + 1)
}

/// Date to congratulate someone born on `born`, if the next occurrence lies
/// within `window_days` of `today` (both ends inclusive). Weekend
/// occurrences are moved to the following Monday after the window check.
pub fn next_congratulation(
    born: NaiveDate,
    today: NaiveDate,
    window_days: i64,
) -> Option<NaiveDate> {
    let occurrence = next_occurrence(born, today)?;
    let delta = (occurrence - today).num_days();
    if !(0..=window_days).contains(&delta) {
        return None;
    }
    Some(adjust_for_weekend(occurrence))
}
