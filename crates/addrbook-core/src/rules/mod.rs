pub mod birthdays;
pub mod dates;

pub use birthdays::{next_congratulation, next_occurrence};
pub use dates::{
    adjust_for_weekend, anniversary_in_year, find_next_weekday, format_date, is_leap_year,
    local_today, parse_date, DATE_FORMAT,
};
