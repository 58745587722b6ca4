//! Contact Book - an interactive, in-memory address book with birthday
//! reminders.
//!
//! The book stores named records (phones and an optional birthday),
//! supports lookup/update/deletion through a fixed command vocabulary,
//! and can report which contacts have birthdays in the next seven days,
//! shifting weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (Name, Phone, Birthday)
//! - **models**: the Record a contact is stored as
//! - **book**: the AddressBook collection and the birthday-window query
//! - **commands**: line parsing, handlers, and error-to-message mapping
//! - **error**: the command-layer error taxonomy
//! - **config**: environment-driven settings

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{dispatch, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult};
pub use models::Record;
