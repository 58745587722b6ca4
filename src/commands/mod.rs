//! The command layer: parsing, handlers, and the dispatch boundary.

pub mod handlers;
pub mod parser;

pub use handlers::{dispatch, Outcome};
pub use parser::{parse_line, Command};
