//! Command handlers and the dispatch boundary.
//!
//! Each handler is a stateless request/response against the address book:
//! it validates its arguments, performs one operation, and returns either
//! a reply string or a [`CommandError`]. [`dispatch`] is the single place
//! errors become user-facing text, rendered as `Error: {message}` from the
//! error's own `Display` - never by sniffing message contents.

use super::parser::{parse_line, Command};
use crate::book::AddressBook;
use crate::domain::{Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// What the session loop should do with a processed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the reply and read the next command.
    Reply(String),
    /// Print the farewell and end the session.
    Exit(String),
}

/// Process one input line against the book.
///
/// `today` anchors the `birthdays` query; the caller passes the current
/// local date. Every error is recovered here - a failed command leaves the
/// book intact and the session running.
pub fn dispatch(line: &str, book: &mut AddressBook, today: NaiveDate) -> Outcome {
    let (command, args) = parse_line(line);
    debug!(?command, args = args.len(), "dispatching command");

    let result = match command {
        Command::Close => return Outcome::Exit("Good bye!".to_string()),
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(&args, book),
        Command::Change => change_contact(&args, book),
        Command::Phone => show_phone(&args, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday => add_birthday(&args, book),
        Command::ShowBirthday => show_birthday(&args, book),
        Command::Birthdays => Ok(birthdays(book, today)),
        Command::Delete => delete_contact(&args, book),
        Command::Unknown => Ok("Invalid command.".to_string()),
    };

    Outcome::Reply(match result {
        Ok(reply) => reply,
        Err(err) => format!("Error: {}", err),
    })
}

/// `add <name> [phone]`: create the contact if absent, then add the
/// optional phone. A record created here stays in the book even when the
/// phone argument turns out invalid, mirroring the two distinct steps.
fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument("Give me name and phone please."))?;

    let mut reply = "Contact updated.";
    if book.find(name).is_none() {
        book.add_record(Record::new(Name::new(*name)?));
        reply = "Contact added.";
    }

    if let Some(phone) = args.get(1) {
        if let Some(record) = book.find_mut(name) {
            record.add_phone(phone)?;
        }
    }

    Ok(reply.to_string())
}

/// `change <name> <old> <new>`: replace one phone on an existing contact.
fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if args.len() < 3 {
        return Err(CommandError::MissingArgument(
            "Give me name, old phone and new phone please.",
        ));
    }
    let (name, old, new) = (args[0], args[1], args[2]);

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`: list a contact's phones, `;`-joined.
fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument("Enter user name."))?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    if record.phones().is_empty() {
        return Ok("No phones for this contact.".to_string());
    }
    Ok(record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; "))
}

/// `all`: one display line per record, insertion order.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts stored.".to_string();
    }
    book.iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`: set a contact's birthday.
fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    if args.len() < 2 {
        return Err(CommandError::MissingArgument(
            "Give me name and birthday please.",
        ));
    }
    let (name, birthday) = (args[0], args[1]);

    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.add_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: print a contact's birthday if set.
fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument("Enter user name."))?;
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;

    match record.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Ok("No birthday set for this contact.".to_string()),
    }
}

/// `birthdays`: the week's congratulation list.
fn birthdays(book: &AddressBook, today: NaiveDate) -> String {
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return "No birthdays in the next week.".to_string();
    }
    upcoming
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete <name>`: the book's own delete is a silent no-op for absent
/// names, so the existence check lives here where it can report.
fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let name = args
        .first()
        .ok_or(CommandError::MissingArgument("Enter user name."))?;

    if book.find(name).is_none() {
        return Err(CommandError::ContactNotFound);
    }
    book.delete(name);
    Ok("Contact deleted.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 20).unwrap()
    }

    fn reply(line: &str, book: &mut AddressBook) -> String {
        match dispatch(line, book, today()) {
            Outcome::Reply(text) => text,
            Outcome::Exit(text) => panic!("unexpected exit: {}", text),
        }
    }

    #[test]
    fn test_hello() {
        let mut book = AddressBook::new();
        assert_eq!(reply("hello", &mut book), "How can I help you?");
    }

    #[test]
    fn test_add_without_name_gives_hint() {
        let mut book = AddressBook::new();
        assert_eq!(
            reply("add", &mut book),
            "Error: Give me name and phone please."
        );
    }

    #[test]
    fn test_add_creates_then_updates() {
        let mut book = AddressBook::new();
        assert_eq!(reply("add John 1234567890", &mut book), "Contact added.");
        assert_eq!(reply("add John 5555555555", &mut book), "Contact updated.");

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_without_phone_creates_empty_contact() {
        let mut book = AddressBook::new();
        assert_eq!(reply("add John", &mut book), "Contact added.");
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn test_add_with_invalid_phone_keeps_contact() {
        let mut book = AddressBook::new();
        assert_eq!(
            reply("add John 123", &mut book),
            "Error: Phone number must be 10 digits"
        );
        // The record itself was created before the phone failed.
        assert!(book.find("John").is_some());
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn test_change_happy_path_and_errors() {
        let mut book = AddressBook::new();
        reply("add John 1234567890", &mut book);

        assert_eq!(
            reply("change John 1234567890 1112223333", &mut book),
            "Contact updated."
        );
        assert_eq!(
            book.find("John").unwrap().phones()[0].as_str(),
            "1112223333"
        );

        assert_eq!(
            reply("change John", &mut book),
            "Error: Give me name, old phone and new phone please."
        );
        assert_eq!(
            reply("change Jane 1112223333 5555555555", &mut book),
            "Error: Contact not found."
        );
        assert_eq!(
            reply("change John 9999999999 5555555555", &mut book),
            "Error: Phone not found"
        );
    }

    #[test]
    fn test_phone_command() {
        let mut book = AddressBook::new();
        reply("add John 1234567890", &mut book);
        reply("add John 5555555555", &mut book);

        assert_eq!(reply("phone John", &mut book), "1234567890; 5555555555");
        assert_eq!(reply("phone", &mut book), "Error: Enter user name.");
        assert_eq!(reply("phone Jane", &mut book), "Error: Contact not found.");
    }

    #[test]
    fn test_phone_with_no_phones() {
        let mut book = AddressBook::new();
        reply("add John", &mut book);
        assert_eq!(reply("phone John", &mut book), "No phones for this contact.");
    }

    #[test]
    fn test_all_command() {
        let mut book = AddressBook::new();
        assert_eq!(reply("all", &mut book), "No contacts stored.");

        reply("add John 1234567890", &mut book);
        reply("add Jane 9876543210", &mut book);
        assert_eq!(
            reply("all", &mut book),
            "Contact name: John, phones: 1234567890\n\
             Contact name: Jane, phones: 9876543210"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        reply("add John 1234567890", &mut book);

        assert_eq!(
            reply("add-birthday John 25.12.1990", &mut book),
            "Birthday added."
        );
        assert_eq!(reply("show-birthday John", &mut book), "25.12.1990");

        assert_eq!(
            reply("add-birthday John", &mut book),
            "Error: Give me name and birthday please."
        );
        assert_eq!(
            reply("add-birthday Jane 25.12.1990", &mut book),
            "Error: Contact not found."
        );
        assert_eq!(
            reply("add-birthday John 30.02.2020", &mut book),
            "Error: Invalid date format. Use DD.MM.YYYY"
        );
    }

    #[test]
    fn test_show_birthday_when_unset() {
        let mut book = AddressBook::new();
        reply("add John", &mut book);
        assert_eq!(
            reply("show-birthday John", &mut book),
            "No birthday set for this contact."
        );
        assert_eq!(
            reply("show-birthday", &mut book),
            "Error: Enter user name."
        );
    }

    #[test]
    fn test_birthdays_command() {
        let mut book = AddressBook::new();
        assert_eq!(reply("birthdays", &mut book), "No birthdays in the next week.");

        reply("add John", &mut book);
        reply("add-birthday John 25.12.1990", &mut book);
        assert_eq!(reply("birthdays", &mut book), "John: 25.12.2024");
    }

    #[test]
    fn test_delete_command() {
        let mut book = AddressBook::new();
        reply("add John", &mut book);

        assert_eq!(reply("delete Jane", &mut book), "Error: Contact not found.");
        assert_eq!(book.len(), 1);

        assert_eq!(reply("delete John", &mut book), "Contact deleted.");
        assert!(book.is_empty());

        assert_eq!(reply("delete", &mut book), "Error: Enter user name.");
    }

    #[test]
    fn test_invalid_command() {
        let mut book = AddressBook::new();
        assert_eq!(reply("", &mut book), "Invalid command.");
        assert_eq!(reply("bogus", &mut book), "Invalid command.");
    }

    #[test]
    fn test_close_and_exit() {
        let mut book = AddressBook::new();
        assert_eq!(
            dispatch("close", &mut book, today()),
            Outcome::Exit("Good bye!".to_string())
        );
        assert_eq!(
            dispatch("exit", &mut book, today()),
            Outcome::Exit("Good bye!".to_string())
        );
    }
}
