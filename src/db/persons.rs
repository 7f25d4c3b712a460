use anyhow::{Context, Result};
use log::debug;
use rusqlite::{params, Row};
use std::collections::BTreeSet;

use super::Database;
use crate::book::AddressBook;
use crate::models::*;

/// Raw column values of one `persons` row, before validation.
struct StoredPerson {
    position: i64,
    name: String,
    phone: String,
    email: String,
    address: String,
    tags: String,
    status: String,
    remark: String,
}

impl StoredPerson {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            position: row.get("position")?,
            name: row.get("name")?,
            phone: row.get("phone")?,
            email: row.get("email")?,
            address: row.get("address")?,
            tags: row.get("tags")?,
            status: row.get("status")?,
            remark: row.get("remark")?,
        })
    }

    fn into_person(self) -> Result<Person> {
        let position = self.position;
        let column = move |name: &'static str| move || format!("invalid `{}` in stored row {}", name, position);

        let tags: BTreeSet<Tag> = serde_json::from_str(&self.tags).with_context(column("tags"))?;
        let status = Status::parse(&self.status).with_context(column("status"))?;

        let person = Person::new(
            Name::new(self.name).with_context(column("name"))?,
            Phone::new(self.phone).with_context(column("phone"))?,
            Email::new(self.email).with_context(column("email"))?,
            Address::new(self.address).with_context(column("address"))?,
            tags,
        )
        .with_status(status)
        .with_remark(Remark::new(self.remark));

        Ok(person)
    }
}

impl Database {
    // ==================== ADDRESS BOOK WRITE ====================

    /// Replace the stored persons with the contents of `book`, keeping its order.
    pub fn save_address_book(&self, book: &AddressBook) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM persons", [])?;
        {
            let mut stmt = tx.prepare(
                r#"INSERT INTO persons (
                    position, name, phone, email, address, tags, status, remark
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
            )?;
            for (position, person) in book.persons().iter().enumerate() {
                let tags = serde_json::to_string(person.tags())?;
                stmt.execute(params![
                    position as i64,
                    person.name().as_str(),
                    person.phone().as_str(),
                    person.email().as_str(),
                    person.address().as_str(),
                    tags,
                    person.status().as_str(),
                    person.remark().as_str(),
                ])?;
            }
        }
        tx.commit()?;
        debug!("event=book_saved persons={}", book.len());
        Ok(())
    }

    // ==================== ADDRESS BOOK READ ====================

    /// Load every stored person in position order.
    ///
    /// Fails if a row holds a value the field types reject, or if two rows
    /// describe the same person.
    pub fn load_address_book(&self) -> Result<AddressBook> {
        let mut stmt = self.conn.prepare(
            "SELECT position, name, phone, email, address, tags, status, remark
             FROM persons ORDER BY position ASC",
        )?;

        let persons = stmt
            .query_map([], StoredPerson::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .map(StoredPerson::into_person)
            .collect::<Result<Vec<_>>>()
            .context("Stored address book contains an invalid person")?;

        let book = AddressBook::from_persons(persons)
            .context("Stored address book contains duplicate persons")?;
        debug!("event=book_loaded persons={}", book.len());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(name: &str, phone: &str, tags: &[&str]) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(format!("{}@example.com", phone)).unwrap(),
            Address::new("1 Main St").unwrap(),
            tags.iter().map(|t| Tag::new(*t).unwrap()).collect(),
        )
    }

    #[test]
    fn test_empty_book() {
        let db = Database::open_memory().unwrap();
        assert!(db.load_address_book().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_preserves_order_and_fields() {
        let db = Database::open_memory().unwrap();
        let book = AddressBook::from_persons(vec![
            person("Zed", "333", &[]),
            person("Amy", "111", &["friends", "vip"])
                .with_status(Status::Accepted)
                .with_remark(Remark::new("Met at the fair\nfollow up")),
        ])
        .unwrap();

        db.save_address_book(&book).unwrap();
        assert_eq!(db.load_address_book().unwrap(), book);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let db = Database::open_memory().unwrap();
        let first = AddressBook::from_persons(vec![person("Amy", "111", &[]), person("Bob", "222", &[])]).unwrap();
        db.save_address_book(&first).unwrap();

        let second = AddressBook::from_persons(vec![person("Cat", "333", &[])]).unwrap();
        db.save_address_book(&second).unwrap();

        assert_eq!(db.load_address_book().unwrap(), second);
    }

    #[test]
    fn test_invalid_row_is_rejected() {
        let db = Database::open_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO persons (position, name, phone, email, address) VALUES (0, 'Amy', 'abc', 'a@b.co', 'x')",
                [],
            )
            .unwrap();
        let err = db.load_address_book().unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("invalid `phone` in stored row 0"), "{}", message);
        assert_eq!(message.matches(Phone::MESSAGE_CONSTRAINTS).count(), 1);
    }

    #[test]
    fn test_duplicate_rows_are_rejected() {
        let db = Database::open_memory().unwrap();
        for position in 0..2 {
            db.conn
                .execute(
                    "INSERT INTO persons (position, name, phone, email, address) VALUES (?, 'Amy', '123', 'a@b.co', 'x')",
                    [position],
                )
                .unwrap();
        }
        let err = db.load_address_book().unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate persons"));
    }

    #[test]
    fn test_column_defaults() {
        let db = Database::open_memory().unwrap();
        db.conn
            .execute(
                "INSERT INTO persons (position, name, phone, email, address) VALUES (0, 'Amy', '123', 'a@b.co', 'x')",
                [],
            )
            .unwrap();
        let book = db.load_address_book().unwrap();
        let amy = &book.persons()[0];
        assert_eq!(amy.status(), Status::Uncontacted);
        assert!(amy.remark().is_empty());
        assert!(amy.tags().is_empty());
    }
}
