use super::command::CommandResult;
use super::{add, delete, edit, find, list, remark, template};

pub const COMMAND_WORD: &str = "help";
pub const EXIT_COMMAND_WORD: &str = "exit";

pub const MESSAGE_USAGE: &str = "help: Shows program usage instructions.\n\
    Example: help";

pub const EXIT_MESSAGE_USAGE: &str = "exit: Exits the program.\n\
    Example: exit";

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting as requested ...";

/// Usage text of every command, in the order shown by `help`.
pub fn all_usages() -> [&'static str; 9] {
    [
        add::MESSAGE_USAGE,
        edit::MESSAGE_USAGE,
        delete::MESSAGE_USAGE,
        find::MESSAGE_USAGE,
        list::MESSAGE_USAGE,
        remark::MESSAGE_USAGE,
        template::MESSAGE_USAGE,
        MESSAGE_USAGE,
        EXIT_MESSAGE_USAGE,
    ]
}

pub fn execute_help() -> CommandResult {
    CommandResult {
        show_help: true,
        ..CommandResult::new(all_usages().join("\n\n"))
    }
}

pub fn execute_exit() -> CommandResult {
    CommandResult {
        exit: true,
        ..CommandResult::new(MESSAGE_EXIT_ACKNOWLEDGEMENT)
    }
}
