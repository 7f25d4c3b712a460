use thiserror::Error;

use crate::book::BookError;
use crate::models::InvalidField;
use crate::templates::TemplateStorageError;

/// User input could not be turned into a command.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: String },

    /// Same message as `InvalidCommandFormat`, keeping the rejected argument as source.
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandArgument {
        usage: String,
        #[source]
        source: Box<ParseError>,
    },

    #[error("Unknown command")]
    UnknownCommand,

    #[error(transparent)]
    InvalidField(#[from] InvalidField),

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<String>),

    #[error("Only one filter per field is allowed at a time!\n{usage}")]
    DuplicateFilter { usage: String },

    #[error(
        "Invalid status provided: {value}\n\
         Please use one of the following: Uncontacted, Contacted, Rejected, Accepted, Unreachable, Busy"
    )]
    InvalidStatus { value: String },

    #[error("At least one field to edit must be provided.")]
    NoFieldEdited,
}

impl ParseError {
    pub fn invalid_format(usage: impl Into<String>) -> Self {
        Self::InvalidCommandFormat { usage: usage.into() }
    }
}

/// A parsed command failed against the current state.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("The person index provided is invalid")]
    InvalidPersonIndex,

    #[error(transparent)]
    Book(#[from] BookError),

    #[error(transparent)]
    Template(#[from] TemplateStorageError),
}
