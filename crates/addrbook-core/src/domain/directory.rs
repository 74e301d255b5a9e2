use crate::domain::Record;
use crate::dto::UpcomingBirthdayDto;
use crate::error::CoreError;
use crate::rules::birthdays::next_congratulation;
use crate::rules::dates::format_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// Name-keyed contact collection. Iteration, and therefore the birthday
/// report, follows ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Record>",
    into = "BTreeMap<String, Record>"
)]
pub struct Directory {
    records: BTreeMap<String, Record>,
}

impl TryFrom<BTreeMap<String, Record>> for Directory {
    type Error = CoreError;

    fn try_from(records: BTreeMap<String, Record>) -> Result<Self, Self::Error> {
        if let Some((key, record)) = records
            .iter()
            .find(|(key, record)| key.as_str() != record.name.as_str())
        {
            return Err(CoreError::MismatchedKey {
                key: key.clone(),
                name: record.name.as_str().to_string(),
            });
        }
        Ok(Self { records })
    }
}

impl From<Directory> for BTreeMap<String, Record> {
    fn from(value: Directory) -> Self {
        value.records
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `record`, replacing any record stored under the same name.
    pub fn add(&mut self, record: Record) -> Option<Record> {
        self.records.insert(record.name.as_str().to_string(), record)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<Record, CoreError> {
        self.records
            .remove(name)
            .ok_or_else(|| CoreError::NotFound(format!("contact {name}")))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Contacts whose next birthday is at most `window_days` after `today`.
    /// Records without a birthday are skipped.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthdayDto> {
        self.iter()
            .filter_map(|record| {
                let born = record.birthday.as_ref()?.date().ok()?;
                let date = next_congratulation(born, today, window_days)?;
                Some(UpcomingBirthdayDto {
                    name: record.name.as_str().to_string(),
                    congratulation_date: format_date(date),
                })
            })
            .collect()
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.iter() {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
