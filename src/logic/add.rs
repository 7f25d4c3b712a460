use log::info;

use super::command::CommandResult;
use super::error::{CommandError, ParseError};
use super::parser::{parse_address, parse_email, parse_name, parse_phone, parse_status, parse_tags};
use super::syntax::{Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_STATUS, PREFIX_TAG};
use super::tokenizer::tokenize;
use crate::book::{BookError, Model};
use crate::models::Person;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add: Adds a person to the address book.\n\
    Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [s/STATUS] [t/TAG]...\n\
    Example: add n/John Doe p/98765432 e/johnd@example.com \
    a/311, Clementi Ave 2, #02-25 s/contacted t/friends t/owesMoney";

pub const MESSAGE_SUCCESS: &str = "New person added: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    person: Person,
}

impl AddCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        if model.has_person(&self.person) {
            return Err(BookError::DuplicatePerson.into());
        }
        model.add_person(self.person.clone())?;
        info!("event=person_added total={}", model.address_book().len());
        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, self.person)))
    }
}

pub fn parse(args: &str) -> Result<AddCommand, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_STATUS, PREFIX_TAG],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !required.iter().all(|p| map.contains(*p)) || !map.preamble().is_empty() {
        return Err(ParseError::invalid_format(MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_STATUS,
    ])?;

    // The `contains` check above guarantees these are present.
    let value = |p: Prefix| map.value(p).unwrap_or_default();
    let name = parse_name(value(PREFIX_NAME))?;
    let phone = parse_phone(value(PREFIX_PHONE))?;
    let email = parse_email(value(PREFIX_EMAIL))?;
    let address = parse_address(value(PREFIX_ADDRESS))?;
    let tags = parse_tags(map.all_values(PREFIX_TAG))?;

    let mut person = Person::new(name, phone, email, address, tags);
    if let Some(raw) = map.value(PREFIX_STATUS) {
        person = person.with_status(parse_status(raw)?);
    }

    Ok(AddCommand::new(person))
}
