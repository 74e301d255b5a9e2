use crate::domain::{Birthday, Name, Phone};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<(), CoreError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    pub fn remove_phone(&mut self, number: &str) -> Result<Phone, CoreError> {
        let idx = self
            .position(number)
            .ok_or_else(|| CoreError::NotFound(format!("phone {number}")))?;
        Ok(self.phones.remove(idx))
    }

    /// Replaces `old` with `new`. The new number goes to the end of the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), CoreError> {
        let phone = Phone::new(new)?;
        let idx = self
            .position(old)
            .ok_or_else(|| CoreError::NotFound(format!("phone {old}")))?;
        self.phones.push(phone);
        self.phones.remove(idx);
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|phone| phone.as_str() == number)
    }

    pub fn set_birthday(&mut self, raw: &str) -> Result<(), CoreError> {
        self.birthday = Some(Birthday::new(raw)?);
        Ok(())
    }

    fn position(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|phone| phone.as_str() == number)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.birthday.as_ref().map(Birthday::as_str).unwrap_or("");
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name, phones, birthday
        )
    }
}
