//! `template`: show or replace the message template of a status.

use super::command::CommandResult;
use super::error::{CommandError, ParseError};
use super::parser::parse_status;
use super::syntax::{PREFIX_MESSAGE, PREFIX_STATUS};
use super::tokenizer::{split_at_prefix, tokenize};
use crate::models::Status;
use crate::templates::TemplateStorage;

pub const COMMAND_WORD: &str = "template";

pub const MESSAGE_USAGE: &str = "template: Shows the message template for a status, \
    or replaces it when a message is given. A blank message restores the default.\n\
    Parameters: s/STATUS [m/MESSAGE]\n\
    Example: template s/contacted\n\
    Example: template s/contacted m/Hi! Thanks for getting back to us.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateCommand {
    Show(Status),
    Save { status: Status, message: String },
}

impl TemplateCommand {
    pub fn execute(&self, templates: &dyn TemplateStorage) -> Result<CommandResult, CommandError> {
        match self {
            Self::Show(status) => {
                let text = templates.read_template(*status)?;
                Ok(CommandResult::new(format!("Template for {}:\n{}", status, text)))
            }
            Self::Save { status, message } => {
                templates.save_template(*status, Some(message.as_str()))?;
                Ok(CommandResult::new(format!("Template for {} saved.", status)))
            }
        }
    }
}

/// `s/STATUS [m/MESSAGE]`. The message runs to the end of the line, so it
/// may itself contain text like `s/`.
pub fn parse(args: &str) -> Result<TemplateCommand, ParseError> {
    let (head, message) = split_at_prefix(args, PREFIX_MESSAGE);
    let map = tokenize(head, &[PREFIX_STATUS]);

    let raw_status = match map.value(PREFIX_STATUS) {
        Some(s) if map.preamble().is_empty() => s,
        _ => return Err(ParseError::invalid_format(MESSAGE_USAGE)),
    };
    map.verify_no_duplicate_prefixes_for(&[PREFIX_STATUS])?;

    let status = parse_status(raw_status).map_err(|_| ParseError::InvalidStatus {
        value: raw_status.to_string(),
    })?;

    Ok(match message {
        Some(message) => TemplateCommand::Save {
            status,
            message: message.trim().to_string(),
        },
        None => TemplateCommand::Show(status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{default_template, MemoryTemplateStorage};

    #[test]
    fn test_parse_show_and_save() {
        assert_eq!(parse(" s/Busy").unwrap(), TemplateCommand::Show(Status::Busy));
        assert_eq!(
            parse(" s/contacted m/Hello there").unwrap(),
            TemplateCommand::Save {
                status: Status::Contacted,
                message: "Hello there".into()
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(ParseError::InvalidCommandFormat { .. })));
        assert!(matches!(parse(" m/hi"), Err(ParseError::InvalidCommandFormat { .. })));
        assert!(matches!(parse(" s/nope"), Err(ParseError::InvalidStatus { .. })));
        assert!(matches!(parse(" s/busy s/rejected"), Err(ParseError::DuplicatePrefixes(_))));
    }

    #[test]
    fn test_message_may_contain_prefixes() {
        assert_eq!(
            parse(" s/busy m/Ask for s/o, then m/ore").unwrap(),
            TemplateCommand::Save {
                status: Status::Busy,
                message: "Ask for s/o, then m/ore".into()
            }
        );
    }

    #[test]
    fn test_execute_round_trip() {
        let store = MemoryTemplateStorage::new();
        let shown = TemplateCommand::Show(Status::Busy).execute(&store).unwrap();
        assert_eq!(
            shown.feedback,
            format!("Template for Busy:\n{}", default_template(Status::Busy))
        );

        TemplateCommand::Save {
            status: Status::Busy,
            message: "Call back later".into(),
        }
        .execute(&store)
        .unwrap();
        let shown = TemplateCommand::Show(Status::Busy).execute(&store).unwrap();
        assert_eq!(shown.feedback, "Template for Busy:\nCall back later");
    }

    #[test]
    fn test_blank_message_restores_default() {
        let store = MemoryTemplateStorage::new();
        store.store(Status::Accepted, "custom").unwrap();
        parse(" s/accepted m/").unwrap().execute(&store).unwrap();
        assert_eq!(store.saved(Status::Accepted), Some(default_template(Status::Accepted)));
    }
}
