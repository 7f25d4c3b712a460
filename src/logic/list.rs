use super::command::CommandResult;
use crate::book::Model;
use crate::models::PersonFilter;

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_USAGE: &str = "list: Lists all persons in the address book.\n\
    Example: list";

pub const MESSAGE_SUCCESS: &str = "Listed all persons";

pub fn execute(model: &mut dyn Model) -> CommandResult {
    model.update_filtered_person_list(PersonFilter::All);
    CommandResult::new(MESSAGE_SUCCESS)
}
