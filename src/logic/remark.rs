//! `remark`: overwrite the remark of a displayed person.

use log::info;

use super::command::CommandResult;
use super::error::{CommandError, ParseError};
use super::parser::parse_index;
use super::syntax::PREFIX_REMARK;
use super::tokenizer::tokenize;
use crate::book::Model;
use crate::models::{Index, Remark};

pub const COMMAND_WORD: &str = "remark";

pub const MESSAGE_USAGE: &str = "remark: Edits the remark of the person identified \
    by the index number used in the last person listing. \
    Existing remark will be overwritten by the input.\n\
    Parameters: INDEX (must be a positive integer) r/[REMARK]\n\
    Example: remark 1 r/Likes to swim.";

pub const MESSAGE_ADD_REMARK_SUCCESS: &str = "Added remark to Person: ";
pub const MESSAGE_DELETE_REMARK_SUCCESS: &str = "Removed remark from Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let shown = model.filtered_person_list();
        let target = shown
            .get(self.index.zero_based())
            .ok_or(CommandError::InvalidPersonIndex)?;

        let remarked = target.with_remark(Remark::new(self.remark.as_str()));
        model.set_person(target, remarked.clone())?;
        info!("event=remark index={} cleared={}", self.index.one_based(), self.remark.is_empty());

        let prefix = if self.remark.is_empty() {
            MESSAGE_DELETE_REMARK_SUCCESS
        } else {
            MESSAGE_ADD_REMARK_SUCCESS
        };
        Ok(CommandResult::new(format!("{}{}", prefix, remarked)))
    }
}

/// `INDEX [r/REMARK]`. A missing `r/` clears the remark.
pub fn parse(args: &str) -> Result<RemarkCommand, ParseError> {
    let map = tokenize(args, &[PREFIX_REMARK]);

    let index = parse_index(map.preamble()).map_err(|e| ParseError::InvalidCommandArgument {
        usage: MESSAGE_USAGE.to_string(),
        source: Box::new(e),
    })?;
    map.verify_no_duplicate_prefixes_for(&[PREFIX_REMARK])?;

    let remark = map.value(PREFIX_REMARK).unwrap_or_default();
    Ok(RemarkCommand::new(index, Remark::new(remark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_parse_index_and_remark() {
        let cmd = parse(" 1 r/Likes to swim.").unwrap();
        assert_eq!(cmd.index(), Index::from_one_based(1).unwrap());
        assert_eq!(cmd.remark().as_str(), "Likes to swim.");
    }

    #[test]
    fn test_parse_empty_remark_clears() {
        assert_eq!(parse(" 2 r/").unwrap().remark(), &Remark::default());
        assert_eq!(parse(" 2").unwrap().remark(), &Remark::default());
    }

    #[test]
    fn test_parse_bad_index_wraps_cause() {
        for input in ["", " r/hello", " 0 r/x", " -3 r/x", " abc r/x"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.to_string(), format!("Invalid command format! \n{}", MESSAGE_USAGE));
            let cause = err.source().expect("index error kept as source");
            assert_eq!(cause.to_string(), "Index is not a non-zero unsigned integer.");
        }
    }

    #[test]
    fn test_parse_duplicate_remark_prefix() {
        assert!(matches!(
            parse(" 1 r/a r/b"),
            Err(ParseError::DuplicatePrefixes(_))
        ));
    }
}
