use std::fmt;

use super::InvalidField;

/// Where a person stands in the outreach pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Uncontacted,
    Contacted,
    Rejected,
    Accepted,
    Unreachable,
    Busy,
}

impl Status {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Status should be one of: Uncontacted, Contacted, Rejected, Accepted, Unreachable, Busy";

    pub fn all() -> &'static [Status] {
        &[
            Self::Uncontacted,
            Self::Contacted,
            Self::Rejected,
            Self::Accepted,
            Self::Unreachable,
            Self::Busy,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uncontacted => "uncontacted",
            Self::Contacted => "contacted",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
            Self::Unreachable => "unreachable",
            Self::Busy => "busy",
        }
    }

    /// Case-insensitive lookup by name. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, InvalidField> {
        let wanted = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == wanted)
            .ok_or(InvalidField(Self::MESSAGE_CONSTRAINTS))
    }

    /// Name with only the first letter upper-cased, e.g. `Unreachable`.
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
