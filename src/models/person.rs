use std::collections::BTreeSet;
use std::fmt;

use super::{Address, Email, Name, Phone, Remark, Status, Tag};

/// A contact in the address book.
///
/// Persons are values: editing a field goes through one of the `with_*`
/// methods, which return a new `Person` and leave `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: BTreeSet<Tag>,
    status: Status,
    remark: Remark,
}

impl Person {
    /// New contact with status `Uncontacted` and no remark.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address, tags: BTreeSet<Tag>) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            status: Status::default(),
            remark: Remark::default(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    pub fn with_name(&self, name: Name) -> Self {
        Self { name, ..self.clone() }
    }

    pub fn with_phone(&self, phone: Phone) -> Self {
        Self { phone, ..self.clone() }
    }

    pub fn with_email(&self, email: Email) -> Self {
        Self { email, ..self.clone() }
    }

    pub fn with_address(&self, address: Address) -> Self {
        Self { address, ..self.clone() }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self { tags, ..self.clone() }
    }

    pub fn with_status(&self, status: Status) -> Self {
        Self { status, ..self.clone() }
    }

    pub fn with_remark(&self, remark: Remark) -> Self {
        Self { remark, ..self.clone() }
    }

    /// Identity check used for duplicate detection: same name, phone and email.
    /// Weaker than `==`, which compares every field.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name && self.phone == other.phone && self.email == other.email
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Status: {}; Remark: {}; Tags: ",
            self.name, self.phone, self.email, self.address, self.status, self.remark
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
