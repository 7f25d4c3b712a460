use std::fmt;

use super::InvalidField;

/// Free-form postal address. Only a leading blank is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Addresses can take any values, and it should not be blank";

    pub fn is_valid(s: &str) -> bool {
        s.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    pub fn new(address: impl Into<String>) -> Result<Self, InvalidField> {
        let address = address.into();
        if Self::is_valid(&address) {
            Ok(Self(address))
        } else {
            Err(InvalidField(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
