use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::InvalidField;

// local-part: alphanumerics separated by single special characters.
// domain: labels of alphanumerics with inner hyphens, last label 2+ chars.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}]+([+_.\-][\p{L}\p{N}]+)*@([\p{L}\p{N}]([\p{L}\p{N}\-]*[\p{L}\p{N}])?\.)*[\p{L}\p{N}][\p{L}\p{N}\-]*[\p{L}\p{N}]$",
    )
    .expect("valid email regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
        and adhere to the following constraints:\n\
        1. The local-part should only contain alphanumeric characters and these special characters, \
        excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
        2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
        separated by periods.\n\
        The domain name must:\n    \
        - end with a domain label at least 2 characters long\n    \
        - have each domain label start and end with alphanumeric characters\n    \
        - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    pub fn is_valid(s: &str) -> bool {
        EMAIL_PATTERN.is_match(s)
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(Email::is_valid("alice@example.com"));
        assert!(Email::is_valid("a@bc"));
        assert!(Email::is_valid("first.last+tag@mail-server.example.org"));
        assert!(Email::is_valid("peter_jack@very-very-very-long-example.com"));
        assert!(Email::is_valid("123@145"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!Email::is_valid(""));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("alice@"));
        assert!(!Email::is_valid("alice example.com"));
        assert!(!Email::is_valid("-alice@example.com"));
        assert!(!Email::is_valid("alice.@example.com"));
        assert!(!Email::is_valid("alice@example.c"));
        assert!(!Email::is_valid("alice@-example.com"));
        assert!(!Email::is_valid("alice@example-.com"));
        assert!(!Email::is_valid("alice@@example.com"));
    }
}
