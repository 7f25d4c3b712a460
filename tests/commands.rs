use reachout::book::{AddressBook, BookError, Model};
use reachout::db::Database;
use reachout::logic::add::AddCommand;
use reachout::logic::remark::RemarkCommand;
use reachout::logic::{CommandError, LogicManager, ParseError};
use reachout::models::*;
use reachout::templates::TemplateStorageManager;
use tempfile::TempDir;

const AMY: &str = "add n/Amy Bee p/11111111 e/amy@example.com a/Block 123, Jurong West t/friends";
const BOB: &str = "add n/Bob Choo p/22222222 e/bob@example.com a/Block 456, Clementi s/contacted";

fn logic() -> (TempDir, LogicManager<TemplateStorageManager>) {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open_memory().unwrap();
    let templates = TemplateStorageManager::new(dir.path().join("templates"));
    (dir, LogicManager::new(db, templates).unwrap())
}

fn names(logic: &LogicManager<TemplateStorageManager>) -> Vec<String> {
    logic
        .filtered_person_list()
        .iter()
        .map(|p| p.name().to_string())
        .collect()
}

#[test]
fn add_find_remark_flow() {
    let (_dir, mut logic) = logic();
    logic.execute(AMY).unwrap();
    logic.execute(BOB).unwrap();

    let found = logic.execute("find n/amy").unwrap();
    assert_eq!(found.feedback, "1 persons listed!");
    assert_eq!(names(&logic), vec!["Amy Bee"]);

    // Index 1 refers to the filtered list, so this remarks Amy.
    let result = logic.execute("remark 1 r/Likes tea").unwrap();
    assert!(result.feedback.starts_with("Added remark to Person: Amy Bee"));
    assert_eq!(logic.filtered_person_list()[0].remark().as_str(), "Likes tea");

    let cleared = logic.execute("remark 1").unwrap();
    assert!(cleared.feedback.starts_with("Removed remark from Person: Amy Bee"));
    assert!(logic.filtered_person_list()[0].remark().is_empty());
}

#[test]
fn remark_index_outside_filtered_list_is_rejected() {
    let (_dir, mut logic) = logic();
    logic.execute(AMY).unwrap();
    logic.execute(BOB).unwrap();
    logic.execute("find s/contacted").unwrap();

    let err = logic.execute("remark 2 r/Nope").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::InvalidPersonIndex)
    ));
}

#[test]
fn find_combines_filters() {
    let (_dir, mut logic) = logic();
    logic.execute(AMY).unwrap();
    logic.execute(BOB).unwrap();

    logic.execute("find t/FRIENDS").unwrap();
    assert_eq!(names(&logic), vec!["Amy Bee"]);

    logic.execute("find e/example.com s/contacted").unwrap();
    assert_eq!(names(&logic), vec!["Bob Choo"]);

    logic.execute("find bee choo").unwrap();
    assert_eq!(names(&logic), vec!["Amy Bee", "Bob Choo"]);

    logic.execute("list").unwrap();
    assert_eq!(names(&logic).len(), 2);
}

#[test]
fn find_rejects_bad_input() {
    let (_dir, mut logic) = logic();

    let err = logic.execute("find s/contacted s/busy").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ParseError>(),
        Some(ParseError::DuplicateFilter { .. })
    ));

    let err = logic.execute("find s/sleeping").unwrap_err();
    assert!(err.to_string().starts_with("Invalid status provided: sleeping"));
}

#[test]
fn edit_and_delete_by_displayed_index() {
    let (_dir, mut logic) = logic();
    logic.execute(AMY).unwrap();
    logic.execute(BOB).unwrap();

    let edited = logic.execute("edit 2 p/33333333 s/busy").unwrap();
    assert!(edited.feedback.starts_with("Edited Person: Bob Choo"));
    let bob = &logic.filtered_person_list()[1];
    assert_eq!(bob.phone().as_str(), "33333333");
    assert_eq!(bob.status(), Status::Busy);

    let deleted = logic.execute("delete 1").unwrap();
    assert!(deleted.feedback.starts_with("Deleted Person: Amy Bee"));
    assert_eq!(names(&logic), vec!["Bob Choo"]);
}

#[test]
fn duplicate_add_is_rejected() {
    let (_dir, mut logic) = logic();
    logic.execute(AMY).unwrap();

    let err = logic.execute(AMY).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CommandError>(),
        Some(CommandError::Book(BookError::DuplicatePerson))
    ));
}

#[test]
fn unknown_and_empty_commands() {
    let (_dir, mut logic) = logic();
    let err = logic.execute("frobnicate").unwrap_err();
    assert_eq!(err.to_string(), "Unknown command");

    let err = logic.execute("   ").unwrap_err();
    assert!(err.to_string().starts_with("Invalid command format!"));
}

#[test]
fn template_command_reads_and_saves() {
    let (dir, mut logic) = logic();

    let shown = logic.execute("template s/busy").unwrap();
    assert_eq!(
        shown.feedback,
        "Template for Busy:\nThis is the default template for status Busy"
    );

    logic.execute("template s/busy m/Try again next week").unwrap();
    let saved = std::fs::read_to_string(dir.path().join("templates").join("busyTemplate.txt")).unwrap();
    assert_eq!(saved, "Try again next week");
}

#[test]
fn failed_save_rolls_back_the_change() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("reachout.db");
    let templates = TemplateStorageManager::new(dir.path().join("templates"));
    let mut logic = LogicManager::new(Database::open_at(&db_path).unwrap(), templates).unwrap();
    logic.execute(AMY).unwrap();

    // Break the table behind the manager's back so the next save fails.
    rusqlite::Connection::open(&db_path)
        .unwrap()
        .execute_batch("DROP TABLE persons;")
        .unwrap();

    let err = logic.execute(BOB).unwrap_err();
    assert!(err.to_string().starts_with("Could not save the address book"));
    assert_eq!(names(&logic), vec!["Amy Bee"]);

    let err = logic.execute("remark 1 r/Lost").unwrap_err();
    assert!(err.to_string().starts_with("Could not save the address book"));
    assert!(logic.filtered_person_list()[0].remark().is_empty());
}

#[test]
fn changes_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("reachout.db");
    let templates = || TemplateStorageManager::new(dir.path().join("templates"));

    {
        let mut logic = LogicManager::new(Database::open_at(&db_path).unwrap(), templates()).unwrap();
        logic.execute(AMY).unwrap();
        logic.execute("remark 1 r/Met at the fair").unwrap();
    }

    let logic = LogicManager::new(Database::open_at(&db_path).unwrap(), templates()).unwrap();
    let persons = logic.filtered_person_list();
    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0].remark().as_str(), "Met at the fair");
}

// ==================== COMMANDS AGAINST A STUB MODEL ====================

/// Model that records how often `add_person` and `set_person` are called.
struct ModelStub {
    book: AddressBook,
    add_calls: usize,
    set_calls: usize,
}

impl ModelStub {
    fn with(persons: Vec<Person>) -> Self {
        Self {
            book: AddressBook::from_persons(persons).unwrap(),
            add_calls: 0,
            set_calls: 0,
        }
    }
}

impl Model for ModelStub {
    fn address_book(&self) -> &AddressBook {
        &self.book
    }

    fn filtered_person_list(&self) -> Vec<Person> {
        self.book.persons().to_vec()
    }

    fn update_filtered_person_list(&mut self, _filter: PersonFilter) {}

    fn has_person(&self, person: &Person) -> bool {
        self.book.contains(person)
    }

    fn add_person(&mut self, person: Person) -> Result<(), BookError> {
        self.add_calls += 1;
        self.book.add(person)
    }

    fn delete_person(&mut self, target: &Person) -> Result<(), BookError> {
        self.book.remove(target)
    }

    fn set_person(&mut self, target: &Person, edited: Person) -> Result<(), BookError> {
        self.set_calls += 1;
        self.book.set(target, edited)
    }
}

fn person(name: &str, phone: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new(phone).unwrap(),
        Email::new(format!("{}@example.com", phone)).unwrap(),
        Address::new("1 Main St").unwrap(),
        [Tag::new("colleagues").unwrap()].into_iter().collect(),
    )
    .with_status(Status::Contacted)
}

#[test]
fn remark_out_of_range_never_touches_model() {
    let mut model = ModelStub::with(vec![person("Amy", "111"), person("Bob", "222")]);
    let command = RemarkCommand::new(Index::from_one_based(3).unwrap(), Remark::new("hi"));

    let err = command.execute(&mut model).unwrap_err();

    assert!(matches!(err, CommandError::InvalidPersonIndex));
    assert_eq!(model.set_calls, 0);
}

#[test]
fn remark_changes_only_the_remark() {
    for text in ["Prefers email", ""] {
        let mut model = ModelStub::with(vec![person("Amy", "111"), person("Bob", "222")]);
        let before = model.filtered_person_list()[1].clone();

        RemarkCommand::new(Index::from_one_based(2).unwrap(), Remark::new(text))
            .execute(&mut model)
            .unwrap();

        let after = &model.filtered_person_list()[1];
        assert_eq!(model.set_calls, 1);
        assert_eq!(after.remark().as_str(), text);
        assert_eq!(after.name(), before.name());
        assert_eq!(after.phone(), before.phone());
        assert_eq!(after.email(), before.email());
        assert_eq!(after.address(), before.address());
        assert_eq!(after.tags(), before.tags());
        assert_eq!(after.status(), before.status());
        assert_eq!(model.filtered_person_list()[0], person("Amy", "111"));
    }
}

#[test]
fn duplicate_add_is_caught_before_adding() {
    let amy = person("Amy", "111");
    let mut model = ModelStub::with(vec![amy.clone()]);

    let err = AddCommand::new(amy.with_remark(Remark::new("again"))).execute(&mut model).unwrap_err();

    assert!(matches!(err, CommandError::Book(BookError::DuplicatePerson)));
    assert_eq!(model.add_calls, 0);
    assert_eq!(model.address_book().len(), 1);
}
