//! Turns one line of user input into a change to the address book.
//!
//! Flow: `parse_command` picks a per-command parser by the leading word,
//! the parser builds a `Command`, and `Command::execute` runs it against the
//! model. `LogicManager` ties this to persistent storage.

pub mod add;
pub mod command;
pub mod delete;
pub mod edit;
pub mod error;
pub mod find;
pub mod help;
pub mod list;
pub mod parser;
pub mod remark;
pub mod syntax;
pub mod template;
pub mod tokenizer;

use anyhow::Result;
use log::{info, warn};

pub use command::{Command, CommandResult};
pub use error::{CommandError, ParseError};
pub use parser::parse_command;

use crate::book::{Model, ModelManager};
use crate::db::Database;
use crate::models::Person;
use crate::templates::TemplateStorage;

pub struct LogicManager<T: TemplateStorage> {
    model: ModelManager,
    db: Database,
    templates: T,
}

impl<T: TemplateStorage> LogicManager<T> {
    /// Load the stored address book and start with every person shown.
    pub fn new(db: Database, templates: T) -> Result<Self> {
        let book = db.load_address_book()?;
        info!("event=logic_ready persons={}", book.len());
        Ok(Self {
            model: ModelManager::new(book),
            db,
            templates,
        })
    }

    /// Parse and run one input line. The address book is saved after any
    /// command that may have changed it.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        let word = input.split_whitespace().next().unwrap_or("");
        info!("event=command_received word={}", word);

        let command = parse_command(input).map_err(|e| {
            warn!("event=command_rejected word={} reason=parse", word);
            e
        })?;
        if !command.mutates_book() {
            return Ok(self.run(&command, word)?);
        }

        // Undo the change if it cannot be saved.
        let before = self.model.clone();
        let result = self.run(&command, word)?;
        if let Err(e) = self.db.save_address_book(self.model.address_book()) {
            warn!("event=book_save_failed word={} status=rolled_back", word);
            self.model = before;
            return Err(e.context("Could not save the address book; the change was not applied"));
        }
        Ok(result)
    }

    fn run(&mut self, command: &Command, word: &str) -> Result<CommandResult, CommandError> {
        command.execute(&mut self.model, &self.templates).map_err(|e| {
            warn!("event=command_failed word={}", word);
            e
        })
    }

    pub fn filtered_person_list(&self) -> Vec<Person> {
        self.model.filtered_person_list()
    }
}
