//! Command-line tokenization.
//!
//! A command line is whitespace-tokenized; the first token (lowercased)
//! names the command and the rest are its arguments. The command keyword
//! is case-insensitive, arguments are passed through verbatim.

use std::str::FromStr;

/// The fixed command vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello` - greet the user
    Hello,
    /// `add <name> [phone]` - create or update a contact
    Add,
    /// `change <name> <old> <new>` - replace a phone
    Change,
    /// `phone <name>` - list a contact's phones
    Phone,
    /// `all` - list every contact
    All,
    /// `add-birthday <name> <DD.MM.YYYY>` - set a birthday
    AddBirthday,
    /// `show-birthday <name>` - show a contact's birthday
    ShowBirthday,
    /// `birthdays` - birthdays in the next seven days
    Birthdays,
    /// `delete <name>` - remove a contact
    Delete,
    /// `close` / `exit` - end the session
    Close,
    /// Anything else, including the empty line
    Unknown,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete),
            "close" | "exit" => Ok(Command::Close),
            _ => Ok(Command::Unknown),
        }
    }
}

/// Split a raw input line into a command and its arguments.
///
/// An empty or whitespace-only line parses as [`Command::Unknown`] with no
/// arguments.
pub fn parse_line(line: &str) -> (Command, Vec<&str>) {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(keyword) => keyword.parse().unwrap_or(Command::Unknown),
        None => Command::Unknown,
    };
    (command, tokens.collect())
}
