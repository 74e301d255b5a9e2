use addrbook_core::{Directory, Record, UpcomingBirthdayDto, DEFAULT_BIRTHDAY_WINDOW_DAYS};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name);
    record.set_birthday(birthday).expect("birthday");
    record
}

fn item(name: &str, congratulation_date: &str) -> UpcomingBirthdayDto {
    UpcomingBirthdayDto {
        name: name.to_string(),
        congratulation_date: congratulation_date.to_string(),
    }
}

#[test]
fn weekday_weekend_and_past_birthdays() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Ann", "12.06.1990"));
    directory.add(with_birthday("Bob", "15.06.1990"));
    directory.add(with_birthday("Cid", "01.01.1990"));

    // 10.06.2024 is a Monday.
    let upcoming = directory.upcoming_birthdays(date(2024, 6, 10), DEFAULT_BIRTHDAY_WINDOW_DAYS);
    assert_eq!(
        upcoming,
        vec![item("Ann", "12.06.2024"), item("Bob", "17.06.2024")]
    );
}

#[test]
fn saturday_at_window_edge_moves_to_monday() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Dee", "15.06.1988"));

    // 08.06.2024 is a Saturday; 15.06.2024 is exactly 7 days later.
    let upcoming = directory.upcoming_birthdays(date(2024, 6, 8), 7);
    assert_eq!(upcoming, vec![item("Dee", "17.06.2024")]);
}

#[test]
fn one_day_past_window_is_excluded() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Eve", "18.06.1995"));

    assert!(directory.upcoming_birthdays(date(2024, 6, 10), 7).is_empty());
    assert_eq!(
        directory.upcoming_birthdays(date(2024, 6, 10), 8),
        vec![item("Eve", "18.06.2024")]
    );
}

#[test]
fn contacts_without_birthday_are_skipped() {
    let mut directory = Directory::new();
    let mut no_birthday = Record::new("Fay");
    no_birthday.add_phone("1234567890").expect("phone");
    directory.add(no_birthday);
    directory.add(with_birthday("Gus", "10.06.1970"));

    assert_eq!(
        directory.upcoming_birthdays(date(2024, 6, 10), 7),
        vec![item("Gus", "10.06.2024")]
    );
}

#[test]
fn leap_day_birthday_is_celebrated_on_feb_28_in_common_years() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Lea", "29.02.2000"));

    // 28.02.2025 is a Friday.
    assert_eq!(
        directory.upcoming_birthdays(date(2025, 2, 25), 7),
        vec![item("Lea", "28.02.2025")]
    );
    // 28.02.2026 is a Saturday, so the greeting moves to Monday 02.03.2026.
    assert_eq!(
        directory.upcoming_birthdays(date(2026, 2, 26), 7),
        vec![item("Lea", "02.03.2026")]
    );
}

#[test]
fn leap_day_birthday_keeps_feb_29_in_leap_years() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Lea", "29.02.2000"));

    // 29.02.2028 is a Tuesday.
    assert_eq!(
        directory.upcoming_birthdays(date(2028, 2, 27), 7),
        vec![item("Lea", "29.02.2028")]
    );
}

#[test]
fn leap_day_rolls_into_next_common_year() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Lea", "29.02.2000"));

    // From 01.03.2024 the next occurrence is 28.02.2025, far away.
    assert!(directory.upcoming_birthdays(date(2024, 3, 1), 7).is_empty());
    assert_eq!(
        directory.upcoming_birthdays(date(2024, 3, 1), 364),
        vec![item("Lea", "28.02.2025")]
    );
}

#[test]
fn report_follows_name_order() {
    let mut directory = Directory::new();
    directory.add(with_birthday("Zed", "11.06.1990"));
    directory.add(with_birthday("Amy", "13.06.1990"));

    let names: Vec<String> = directory
        .upcoming_birthdays(date(2024, 6, 10), 7)
        .into_iter()
        .map(|item| item.name)
        .collect();
    assert_eq!(names, ["Amy", "Zed"]);
}
