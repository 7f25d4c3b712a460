use super::add::AddCommand;
use super::delete::DeleteCommand;
use super::edit::EditCommand;
use super::error::CommandError;
use super::find::FindCommand;
use super::remark::RemarkCommand;
use super::template::TemplateCommand;
use super::{help, list};
use crate::book::Model;
use crate::templates::TemplateStorage;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(AddCommand),
    Edit(EditCommand),
    Delete(DeleteCommand),
    Find(FindCommand),
    List,
    Remark(RemarkCommand),
    Template(TemplateCommand),
    Help,
    Exit,
}

impl Command {
    pub fn execute(
        &self,
        model: &mut dyn Model,
        templates: &dyn TemplateStorage,
    ) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(c) => c.execute(model),
            Self::Edit(c) => c.execute(model),
            Self::Delete(c) => c.execute(model),
            Self::Find(c) => Ok(c.execute(model)),
            Self::List => Ok(list::execute(model)),
            Self::Remark(c) => c.execute(model),
            Self::Template(c) => c.execute(templates),
            Self::Help => Ok(help::execute_help()),
            Self::Exit => Ok(help::execute_exit()),
        }
    }

    /// True for commands that may change the address book.
    pub fn mutates_book(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Edit(_) | Self::Delete(_) | Self::Remark(_))
    }
}
