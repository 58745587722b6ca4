//! Error types for the contact book.
//!
//! This module defines the command-layer error type using `thiserror`.
//! Every failure a command can hit is an explicit variant; the dispatcher
//! renders each one as a single `Error: …` line and never inspects message
//! text to decide what went wrong.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while processing a single command.
///
/// None of these outlive the command that produced them: the dispatcher
/// converts each into a user-facing message and the session loop carries
/// on with the book untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field value failed validation (phone, date, or name).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An edit/remove targeted a phone the record does not hold.
    #[error("Phone not found")]
    PhoneNotFound,

    /// The command referenced a contact that is not in the book.
    #[error("Contact not found.")]
    ContactNotFound,

    /// Too few tokens for the command; carries the command-specific hint.
    #[error("{0}")]
    MissingArgument(&'static str),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
