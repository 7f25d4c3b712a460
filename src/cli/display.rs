use crate::models::Person;

use super::ui::truncate;

const REMARK_PREVIEW_CHARS: usize = 60;

/// Print the currently shown persons, numbered from 1 so the numbers can be
/// passed straight to `edit`, `delete` and `remark`.
pub fn print_person_list(persons: &[Person]) {
    if persons.is_empty() {
        println!("No persons to show.");
        return;
    }

    for (i, person) in persons.iter().enumerate() {
        for line in person_card(i + 1, person) {
            println!("{}", line);
        }
    }
}

/// Lines for one person: a numbered header, then only the non-empty extras.
pub fn person_card(number: usize, person: &Person) -> Vec<String> {
    let mut lines = vec![format!("{}. {}  ({})", number, person.name(), person.status())];

    lines.push(format!("   {}", person.phone()));
    lines.push(format!("   {}", person.email()));
    lines.push(format!("   {}", person.address()));

    if !person.tags().is_empty() {
        let tags: Vec<String> = person.tags().iter().map(|t| t.to_string()).collect();
        lines.push(format!("   {}", tags.join("")));
    }

    let remark = person.remark().as_str();
    if !remark.is_empty() {
        let first_line = remark.lines().next().unwrap_or_default();
        lines.push(format!("   \"{}\"", truncate(first_line, REMARK_PREVIEW_CHARS)));
    }

    lines
}
