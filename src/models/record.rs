//! Record model representing one contact in the book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{CommandError, CommandResult};
use serde::Serialize;
use std::fmt;

/// One contact: a name, an ordered list of phones, and an optional
/// birthday.
///
/// Phones are kept in insertion order and duplicates are allowed; callers
/// that care about uniqueness check with [`Record::find_phone`] first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The stored birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhone` if `value` is not a 10-digit phone number.
    pub fn add_phone(&mut self, value: &str) -> CommandResult<()> {
        let phone = Phone::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `value`.
    ///
    /// # Errors
    ///
    /// Returns `PhoneNotFound` if no stored phone matches.
    pub fn remove_phone(&mut self, value: &str) -> CommandResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or(CommandError::PhoneNotFound)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a freshly validated
    /// phone built from `new`.
    ///
    /// The new value is validated before the list is touched, so a failed
    /// edit leaves the old phone in place.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPhone` if `new` fails validation, or
    /// `PhoneNotFound` if `old` is not in the list.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let replacement = Phone::new(new)?;
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or(CommandError::PhoneNotFound)?;
        self.phones[index] = replacement;
        Ok(())
    }

    /// Find the first phone whose value equals `value`. Pure lookup, no
    /// error for a miss.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate `value` and set (or overwrite) the birthday.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDate` if `value` is not a real `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, value: &str) -> CommandResult<()> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
