use crate::error::CoreError;
use crate::rules::dates::parse_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A birthday in `DD.MM.YYYY` form. The original string is kept as the
/// canonical value; use [`Birthday::date`] for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(String);

impl Birthday {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        parse_date(raw)?;
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn date(&self) -> Result<NaiveDate, CoreError> {
        parse_date(&self.0)
    }
}

impl TryFrom<String> for Birthday {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_date(&value)?;
        Ok(Self(value))
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
