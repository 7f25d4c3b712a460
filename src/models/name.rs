use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::InvalidField;

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{N}][\p{L}\p{N} ]*$").expect("valid name pattern"));

/// A person's full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        NAME_PATTERN.is_match(s)
    }

    pub fn new(name: impl Into<String>) -> Result<Self, InvalidField> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(InvalidField(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `keyword` equals one of the whitespace-separated words of
    /// this name, ignoring case.
    pub fn contains_word(&self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        !keyword.is_empty()
            && self
                .0
                .split_whitespace()
                .any(|word| word.to_lowercase() == keyword)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
