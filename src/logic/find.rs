//! `find`: filter the displayed list.
//!
//! Two forms:
//! - bare keywords, `find alice bob`, match any whole word of the name;
//! - prefixed filters, `find n/alice t/vip s/busy`, AND-combined per field.

use log::debug;

use super::command::CommandResult;
use super::error::ParseError;
use super::parser::{parse_status, parse_tag};
use super::syntax::{Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_STATUS, PREFIX_TAG};
use super::tokenizer::tokenize;
use crate::book::Model;
use crate::models::{NameContainsKeywords, PersonFilter, PersonMatchesKeywords};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of \
    the specified keywords (case-insensitive), or who match every given filter.\n\
    Parameters: KEYWORD [MORE_KEYWORDS]...\n\
    Or: [n/NAME] [t/TAG]... [s/STATUS] [p/PHONE] [e/EMAIL] [a/ADDRESS]\n\
    Example: find alice bob charlie\n\
    Example: find n/alice t/friends s/contacted";

const FILTER_PREFIXES: [Prefix; 6] =
    [PREFIX_NAME, PREFIX_TAG, PREFIX_STATUS, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    filter: PersonFilter,
}

impl FindCommand {
    pub fn new(filter: PersonFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &PersonFilter {
        &self.filter
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandResult {
        model.update_filtered_person_list(self.filter.clone());
        let shown = model.filtered_person_list().len();
        CommandResult::new(format!("{} persons listed!", shown))
    }
}

pub fn parse(args: &str) -> Result<FindCommand, ParseError> {
    let map = tokenize(args, &FILTER_PREFIXES);
    let preamble = map.preamble();

    if !FILTER_PREFIXES.iter().any(|p| map.contains(*p)) {
        let keywords: Vec<String> = preamble.split_whitespace().map(str::to_string).collect();
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(MESSAGE_USAGE));
        }
        return Ok(FindCommand::new(PersonFilter::NameKeywords(NameContainsKeywords::new(
            keywords,
        ))));
    }

    for tag in map.all_values(PREFIX_TAG) {
        if let Err(e) = parse_tag(tag) {
            return Err(ParseError::invalid_format(e.to_string()));
        }
    }

    if !preamble.is_empty() {
        return Err(ParseError::invalid_format(MESSAGE_USAGE));
    }

    map.verify_no_duplicate_prefixes_for(&[
        PREFIX_NAME,
        PREFIX_STATUS,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
    ])
    .map_err(|_| ParseError::DuplicateFilter {
        usage: MESSAGE_USAGE.to_string(),
    })?;

    let name = map.value(PREFIX_NAME).and_then(|v| {
        let words: Vec<String> = v.split_whitespace().map(str::to_string).collect();
        (!words.is_empty()).then_some(words)
    });

    let tags: Vec<String> = map
        .all_values(PREFIX_TAG)
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    let status = match map.value(PREFIX_STATUS) {
        Some(raw) => Some(parse_status(raw).map_err(|_| ParseError::InvalidStatus {
            value: raw.trim().to_string(),
        })?),
        None => None,
    };

    let predicate = PersonMatchesKeywords {
        name,
        tags: (!tags.is_empty()).then_some(tags),
        status,
        phone: map.value(PREFIX_PHONE).map(|v| v.trim().to_string()),
        email: map.value(PREFIX_EMAIL).map(|v| v.trim().to_string()),
        address: map.value(PREFIX_ADDRESS).map(|v| v.trim().to_string()),
    };
    debug!("event=find_parsed mode=prefixed filter={:?}", predicate);

    Ok(FindCommand::new(PersonFilter::Keywords(predicate)))
}
