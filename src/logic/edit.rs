use std::collections::BTreeSet;

use log::info;

use super::command::CommandResult;
use super::error::{CommandError, ParseError};
use super::parser::{
    parse_address, parse_email, parse_index, parse_name, parse_phone, parse_status, parse_tags,
};
use super::syntax::{PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_STATUS, PREFIX_TAG};
use super::tokenizer::tokenize;
use crate::book::Model;
use crate::models::{Address, Email, Index, Name, Person, PersonFilter, Phone, Status, Tag};

pub const COMMAND_WORD: &str = "edit";

pub const MESSAGE_USAGE: &str = "edit: Edits the details of the person identified \
    by the index number used in the displayed person list. \
    Existing values will be overwritten by the input values.\n\
    Parameters: INDEX (must be a positive integer) \
    [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [s/STATUS] [t/TAG]...\n\
    Example: edit 1 p/91234567 e/johndoe@example.com";

pub const MESSAGE_SUCCESS: &str = "Edited Person: ";

/// Fields to replace. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub status: Option<Status>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.status.is_some()
            || self.tags.is_some()
    }

    pub fn apply(&self, person: &Person) -> Person {
        let mut edited = person.clone();
        if let Some(name) = &self.name {
            edited = edited.with_name(name.clone());
        }
        if let Some(phone) = &self.phone {
            edited = edited.with_phone(phone.clone());
        }
        if let Some(email) = &self.email {
            edited = edited.with_email(email.clone());
        }
        if let Some(address) = &self.address {
            edited = edited.with_address(address.clone());
        }
        if let Some(status) = self.status {
            edited = edited.with_status(status);
        }
        if let Some(tags) = &self.tags {
            edited = edited.with_tags(tags.clone());
        }
        edited
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let shown = model.filtered_person_list();
        let target = shown
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidPersonIndex)?;

        let edited = self.descriptor.apply(target);
        model.set_person(target, edited.clone())?;
        model.update_filtered_person_list(PersonFilter::All);
        info!("event=person_edited index={}", self.index.one_based());

        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, edited)))
    }
}

pub fn parse(args: &str) -> Result<EditCommand, ParseError> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_STATUS, PREFIX_TAG],
    );

    let index = parse_index(map.preamble()).map_err(|e| ParseError::InvalidCommandArgument {
        usage: MESSAGE_USAGE.to_string(),
        source: Box::new(e),
    })?;
    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_STATUS,
    ])?;

    let descriptor = EditPersonDescriptor {
        name: map.value(PREFIX_NAME).map(parse_name).transpose()?,
        phone: map.value(PREFIX_PHONE).map(parse_phone).transpose()?,
        email: map.value(PREFIX_EMAIL).map(parse_email).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
        status: map.value(PREFIX_STATUS).map(parse_status).transpose()?,
        tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
    };

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldEdited);
    }
    Ok(EditCommand::new(index, descriptor))
}

/// No `t/` keeps tags; a single empty `t/` clears them.
fn parse_tags_for_edit(values: &[String]) -> Result<Option<BTreeSet<Tag>>, ParseError> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_tags(values).map(Some),
    }
}
