use addrbook_core::Directory;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use std::str::FromStr;
use tracing::debug;

use crate::error::user_message;

pub mod birthdays;
pub mod contacts;

pub struct Context<'a> {
    pub directory: &'a mut Directory,
    pub today: NaiveDate,
    pub window_days: i64,
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    RemovePhone,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl FromStr for ReplCommand {
    type Err = ();

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "hello" => Ok(ReplCommand::Hello),
            "add" => Ok(ReplCommand::Add),
            "change" => Ok(ReplCommand::Change),
            "phone" => Ok(ReplCommand::Phone),
            "all" => Ok(ReplCommand::All),
            "delete" => Ok(ReplCommand::Delete),
            "remove-phone" => Ok(ReplCommand::RemovePhone),
            "add-birthday" => Ok(ReplCommand::AddBirthday),
            "show-birthday" => Ok(ReplCommand::ShowBirthday),
            "birthdays" => Ok(ReplCommand::Birthdays),
            "close" | "exit" => Ok(ReplCommand::Exit),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Exit(String),
}

/// Splits a line into a command word and its arguments.
pub fn parse_input(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?;
    Some((command, parts.collect()))
}

pub fn dispatch(ctx: &mut Context<'_>, command: &str, args: &[&str]) -> Reply {
    let Ok(parsed) = ReplCommand::from_str(command) else {
        debug!(command, "unknown command");
        return Reply::Continue("Invalid command.".to_string());
    };
    debug!(?parsed, args = args.len(), "dispatching command");

    let outcome = match parsed {
        ReplCommand::Exit => return Reply::Exit("Good bye!".to_string()),
        ReplCommand::Hello => Ok("How can I help you?".to_string()),
        ReplCommand::Add => contacts::add_contact(ctx, args),
        ReplCommand::Change => contacts::change_contact(ctx, args),
        ReplCommand::Phone => contacts::show_contact(ctx, args),
        ReplCommand::All => contacts::all_contacts(ctx),
        ReplCommand::Delete => contacts::delete_contact(ctx, args),
        ReplCommand::RemovePhone => contacts::remove_phone(ctx, args),
        ReplCommand::AddBirthday => birthdays::add_birthday(ctx, args),
        ReplCommand::ShowBirthday => birthdays::show_birthday(ctx, args),
        ReplCommand::Birthdays => birthdays::upcoming(ctx),
    };

    match outcome {
        Ok(message) => Reply::Continue(message),
        Err(err) => {
            debug!(error = %err, "command failed");
            Reply::Continue(user_message(&err))
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::{dispatch, parse_input, Context, Reply};
    use addrbook_core::Directory;
    use chrono::NaiveDate;

    pub(crate) fn run(directory: &mut Directory, line: &str) -> String {
        let mut ctx = Context {
            directory,
            // Monday.
            today: NaiveDate::from_ymd_opt(2024, 6, 10).expect("date"),
            window_days: 7,
            json: false,
        };
        let (command, args) = parse_input(line).expect("command");
        match dispatch(&mut ctx, command, &args) {
            Reply::Continue(message) | Reply::Exit(message) => message,
        }
    }

    #[test]
    fn parse_input_splits_on_whitespace() {
        let (command, args) = parse_input("  add   Ann  0501234567 ").expect("parsed");
        assert_eq!(command, "add");
        assert_eq!(args, ["Ann", "0501234567"]);
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn commands_are_case_insensitive() {
        let mut directory = Directory::new();
        assert_eq!(run(&mut directory, "HeLLo"), "How can I help you?");
    }

    #[test]
    fn unknown_command_is_reported() {
        let mut directory = Directory::new();
        assert_eq!(run(&mut directory, "fly"), "Invalid command.");
    }

    #[test]
    fn exit_and_close_end_the_session() {
        let mut directory = Directory::new();
        let mut ctx = Context {
            directory: &mut directory,
            today: NaiveDate::from_ymd_opt(2024, 6, 10).expect("date"),
            window_days: 7,
            json: false,
        };
        assert_eq!(
            dispatch(&mut ctx, "close", &[]),
            Reply::Exit("Good bye!".to_string())
        );
        assert_eq!(
            dispatch(&mut ctx, "EXIT", &[]),
            Reply::Exit("Good bye!".to_string())
        );
    }
}
