use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid phone number {0:?}: expected exactly 10 digits")]
    InvalidPhone(String),
    #[error("invalid birthday {0:?}: expected DD.MM.YYYY")]
    InvalidBirthday(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("directory key {key:?} does not match record name {name:?}")]
    MismatchedKey { key: String, name: String },
}
