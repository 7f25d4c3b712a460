//! Filters applied to the displayed person list by `find` and `list`.

use super::{Person, Status};

/// Matches persons whose name contains any of the keywords as a whole word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContainsKeywords {
    keywords: Vec<String>,
}

impl NameContainsKeywords {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn matches(&self, person: &Person) -> bool {
        self.keywords.iter().any(|k| person.name().contains_word(k))
    }
}

/// Per-field filter built from prefixed `find` arguments.
///
/// `None` means the field is not filtered on. Every supplied field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonMatchesKeywords {
    pub name: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub status: Option<Status>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl PersonMatchesKeywords {
    pub fn matches(&self, person: &Person) -> bool {
        let name_ok = self
            .name
            .as_ref()
            .map_or(true, |kws| kws.iter().any(|k| person.name().contains_word(k)));

        let tags_ok = self.tags.as_ref().map_or(true, |wanted| {
            wanted
                .iter()
                .all(|w| person.tags().iter().any(|t| eq_ignore_case(t.name(), w)))
        });

        let status_ok = self.status.map_or(true, |s| person.status() == s);

        let phone_ok = self
            .phone
            .as_ref()
            .map_or(true, |p| person.phone().as_str().contains(p.as_str()));

        let email_ok = self
            .email
            .as_ref()
            .map_or(true, |e| contains_ignore_case(person.email().as_str(), e));

        let address_ok = self
            .address
            .as_ref()
            .map_or(true, |a| contains_ignore_case(person.address().as_str(), a));

        name_ok && tags_ok && status_ok && phone_ok && email_ok && address_ok
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// The predicate currently applied to the displayed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    NameKeywords(NameContainsKeywords),
    Keywords(PersonMatchesKeywords),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::NameKeywords(p) => p.matches(person),
            Self::Keywords(p) => p.matches(person),
        }
    }
}
