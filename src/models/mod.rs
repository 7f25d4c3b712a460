mod address;
mod email;
mod index;
mod name;
mod person;
mod phone;
mod predicate;
mod remark;
mod status;
mod tag;

pub use address::Address;
pub use email::Email;
pub use index::Index;
pub use name::Name;
pub use person::Person;
pub use phone::Phone;
pub use predicate::{NameContainsKeywords, PersonFilter, PersonMatchesKeywords};
pub use remark::Remark;
pub use status::Status;
pub use tag::Tag;

use thiserror::Error;

/// A raw value was rejected by one of the field types.
///
/// Carries the field's constraint message, which is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidField(pub &'static str);
