//! In-memory address book and the model facade commands run against.

use thiserror::Error;

use crate::models::{Person, PersonFilter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("This person already exists in the address book")]
    DuplicatePerson,
    #[error("Person not found in the address book")]
    PersonNotFound,
}

/// Ordered list of persons, unique by identity (`Person::is_same_person`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored list. Fails on the first identity clash.
    pub fn from_persons(persons: Vec<Person>) -> Result<Self, BookError> {
        let mut book = Self::new();
        for person in persons {
            book.add(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> Result<(), BookError> {
        if self.contains(&person) {
            return Err(BookError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replace `target` (matched by full equality) with `edited`, keeping its position.
    pub fn set(&mut self, target: &Person, edited: Person) -> Result<(), BookError> {
        let pos = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(BookError::PersonNotFound)?;

        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != pos && p.is_same_person(&edited));
        if clashes {
            return Err(BookError::DuplicatePerson);
        }

        self.persons[pos] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Person) -> Result<(), BookError> {
        let pos = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(BookError::PersonNotFound)?;
        self.persons.remove(pos);
        Ok(())
    }
}

/// What commands see of the application state.
pub trait Model {
    fn address_book(&self) -> &AddressBook;

    /// Persons matching the current filter, in book order.
    fn filtered_person_list(&self) -> Vec<Person>;

    fn update_filtered_person_list(&mut self, filter: PersonFilter);

    fn has_person(&self, person: &Person) -> bool;

    fn add_person(&mut self, person: Person) -> Result<(), BookError>;

    fn delete_person(&mut self, target: &Person) -> Result<(), BookError>;

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), BookError>;
}

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    book: AddressBook,
    filter: PersonFilter,
}

impl ModelManager {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            filter: PersonFilter::All,
        }
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.book
    }

    fn filtered_person_list(&self) -> Vec<Person> {
        self.book
            .persons()
            .iter()
            .filter(|p| self.filter.matches(p))
            .cloned()
            .collect()
    }

    fn update_filtered_person_list(&mut self, filter: PersonFilter) {
        self.filter = filter;
    }

    fn has_person(&self, person: &Person) -> bool {
        self.book.contains(person)
    }

    fn add_person(&mut self, person: Person) -> Result<(), BookError> {
        self.book.add(person)?;
        self.filter = PersonFilter::All;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), BookError> {
        self.book.remove(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), BookError> {
        self.book.set(target, edited)
    }
}
