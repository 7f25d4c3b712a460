use serde::{Deserialize, Serialize};
use std::fmt;

use super::InvalidField;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
    name: String,
}

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    pub fn is_valid(s: &str) -> bool {
        !s.is_empty() && s.chars().all(char::is_alphanumeric)
    }

    pub fn new(name: impl Into<String>) -> Result<Self, InvalidField> {
        let name = name.into();
        if Self::is_valid(&name) {
            Ok(Self { name })
        } else {
            Err(InvalidField(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<String> for Tag {
    type Error = InvalidField;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.name
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}
