use std::fmt;

use super::InvalidField;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    pub fn is_valid(s: &str) -> bool {
        s.len() >= 3 && s.chars().all(|c| c.is_ascii_digit())
    }

    pub fn new(number: impl Into<String>) -> Result<Self, InvalidField> {
        let number = number.into();
        if Self::is_valid(&number) {
            Ok(Self(number))
        } else {
            Err(InvalidField(Self::MESSAGE_CONSTRAINTS))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("9312 1534"));
        assert!(!Phone::is_valid("+6593121534"));
        assert!(!Phone::is_valid(""));
    }
}
