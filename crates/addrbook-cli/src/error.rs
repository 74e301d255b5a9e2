use addrbook_config::ConfigError;
use addrbook_core::CoreError;
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("{0}")]
    InvalidInput(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

/// Lookup misses share the core's error so every "no such" reply reads the same.
pub fn not_found(what: impl Into<String>) -> Error {
    CoreError::NotFound(what.into()).into()
}

/// Text shown to the user when a command fails. The loop keeps running.
pub fn user_message(err: &Error) -> String {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            let CliError::InvalidInput(message) = cli_err;
            return message.clone();
        }
        if let Some(core_err) = cause.downcast_ref::<CoreError>() {
            return match core_err {
                CoreError::InvalidPhone(_) => "Phone number must be exactly 10 digits.".to_string(),
                CoreError::InvalidBirthday(_) => {
                    "Birthday must use the DD.MM.YYYY format.".to_string()
                }
                CoreError::NotFound(what) => format!("There is no such {what}."),
                CoreError::MismatchedKey { .. } => "Something went wrong.".to_string(),
            };
        }
    }
    "Something went wrong.".to_string()
}

pub fn report_error(err: &Error, verbose: bool) {
    let rendered = if verbose {
        format!("{err:#}")
    } else {
        err.to_string()
    };
    eprintln!("error: {rendered}");
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if cause.downcast_ref::<CliError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if cause.downcast_ref::<CoreError>().is_some() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{invalid_input, not_found, user_message};
    use addrbook_core::CoreError;
    use anyhow::{Context as _, Error};

    #[test]
    fn core_errors_map_to_friendly_text() {
        let err = Error::from(CoreError::InvalidPhone("12".to_string()));
        assert_eq!(user_message(&err), "Phone number must be exactly 10 digits.");

        let err = Error::from(CoreError::NotFound("phone 1234567890".to_string()));
        assert_eq!(user_message(&err), "There is no such phone 1234567890.");
    }

    #[test]
    fn cli_errors_map_through_context() {
        let err = Err::<(), _>(not_found("contact Ann"))
            .context("change contact")
            .unwrap_err();
        assert_eq!(user_message(&err), "There is no such contact Ann.");
        assert!(err.chain().any(|cause| cause.is::<CoreError>()));
        assert_eq!(
            user_message(&invalid_input("Give me a name please.")),
            "Give me a name please."
        );
    }

    #[test]
    fn unknown_errors_fall_back() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(user_message(&err), "Something went wrong.");
    }
}
