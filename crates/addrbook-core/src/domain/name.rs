use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact name, used verbatim as the directory key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Name;

    #[test]
    fn name_keeps_raw_value() {
        let name = Name::new("Ann Lee");
        assert_eq!(name.as_str(), "Ann Lee");
        assert_eq!(name.to_string(), "Ann Lee");
    }
}
