use log::info;

use super::command::CommandResult;
use super::error::{CommandError, ParseError};
use super::parser::parse_index;
use crate::book::Model;
use crate::models::Index;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete: Deletes the person identified by the index number \
    used in the displayed person list.\n\
    Parameters: INDEX (must be a positive integer)\n\
    Example: delete 1";

pub const MESSAGE_SUCCESS: &str = "Deleted Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCommand {
    index: Index,
}

impl DeleteCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let shown = model.filtered_person_list();
        let target = shown
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidPersonIndex)?;

        model.delete_person(target)?;
        info!("event=person_deleted index={}", self.index.one_based());
        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, target)))
    }
}

pub fn parse(args: &str) -> Result<DeleteCommand, ParseError> {
    parse_index(args)
        .map(DeleteCommand::new)
        .map_err(|e| ParseError::InvalidCommandArgument {
            usage: MESSAGE_USAGE.to_string(),
            source: Box::new(e),
        })
}
