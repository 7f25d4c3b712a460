//! Command dispatch and shared argument parsing.

use std::collections::BTreeSet;

use super::command::Command;
use super::error::ParseError;
use super::{add, delete, edit, find, help, list, remark, template};
use crate::models::{Address, Email, Index, Name, Phone, Status, Tag};

/// Parse one line of user input into a command.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_format(help::MESSAGE_USAGE));
    }

    // Keep the whitespace in front of the arguments; prefixes are matched after it.
    let (word, args) = match trimmed.find(char::is_whitespace) {
        Some(i) => (&trimmed[..i], &trimmed[i..]),
        None => (trimmed, ""),
    };

    match word {
        add::COMMAND_WORD => add::parse(args).map(Command::Add),
        edit::COMMAND_WORD => edit::parse(args).map(Command::Edit),
        delete::COMMAND_WORD => delete::parse(args).map(Command::Delete),
        find::COMMAND_WORD => find::parse(args).map(Command::Find),
        list::COMMAND_WORD => Ok(Command::List),
        remark::COMMAND_WORD => remark::parse(args).map(Command::Remark),
        template::COMMAND_WORD => template::parse(args).map(Command::Template),
        help::COMMAND_WORD => Ok(Command::Help),
        help::EXIT_COMMAND_WORD => Ok(Command::Exit),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// A 1-based, unsigned, non-zero integer. Signs are rejected.
pub fn parse_index(s: &str) -> Result<Index, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(s: &str) -> Result<Name, ParseError> {
    Ok(Name::new(s.trim())?)
}

pub fn parse_phone(s: &str) -> Result<Phone, ParseError> {
    Ok(Phone::new(s.trim())?)
}

pub fn parse_email(s: &str) -> Result<Email, ParseError> {
    Ok(Email::new(s.trim())?)
}

pub fn parse_address(s: &str) -> Result<Address, ParseError> {
    Ok(Address::new(s.trim())?)
}

pub fn parse_status(s: &str) -> Result<Status, ParseError> {
    Ok(Status::parse(s)?)
}

pub fn parse_tag(s: &str) -> Result<Tag, ParseError> {
    Ok(Tag::new(s.trim())?)
}

pub fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    values.iter().map(|v| parse_tag(v)).collect()
}
