//! Contact Book - main entry point
//!
//! Runs the interactive session loop: read a line, dispatch it against
//! the in-memory address book, print the reply, until `close`/`exit`.

use anyhow::Result;
use chrono::Local;
use contact_book::commands::{dispatch, Outcome};
use contact_book::{AddressBook, Config};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Logging goes to stderr only; stdout belongs to the conversation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("starting contact book session");

    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        line.clear();
        // EOF ends the session the same way `exit` does, minus the farewell.
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let today = Local::now().date_naive();
        match dispatch(&line, &mut book, today) {
            Outcome::Reply(reply) => println!("{}", reply),
            Outcome::Exit(farewell) => {
                println!("{}", farewell);
                break;
            }
        }
    }

    info!(contacts = book.len(), "session ended");
    Ok(())
}
