//! The address book: a name-keyed, insertion-ordered collection of
//! records, plus the upcoming-birthdays query.

use crate::domain::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// One entry in the upcoming-birthdays report.
///
/// `congratulation_date` is the next occurrence of the contact's birthday,
/// already shifted off the weekend when needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// The contact's name.
    pub name: String,

    /// The date to congratulate on, serialized as `DD.MM.YYYY`.
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    date.format(DATE_FORMAT).to_string().serialize(serializer)
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(DATE_FORMAT)
        )
    }
}

/// A name-keyed collection of [`Record`]s.
///
/// Keys are unique; adding a record under an existing name replaces the
/// old one (last write wins — the `add` command merges instead by looking
/// the record up first). Iteration follows insertion order. The book lives
/// for the session and holds no global state.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Insertion order of keys, kept in sync with `records`.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, replacing any record already stored
    /// under that name. Never fails.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.insert(key.clone(), record).is_some() {
            debug!(name = %key, "replaced existing record");
        } else {
            self.order.push(key);
        }
    }

    /// Look up a record by name. Pure, no error for a miss.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`; a no-op if there is none.
    /// The command layer adds its own existence check on top.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            self.order.retain(|key| key != name);
            debug!(name, "deleted record");
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Contacts whose birthdays fall within the next seven days of
    /// `today`, inclusive on both ends.
    ///
    /// For each record with a birthday, the next occurrence of its
    /// month/day is computed (this year, or next year if it has already
    /// passed). The contact is included when `0 <= occurrence - today <= 7`
    /// whole days; an included occurrence landing on Saturday is shifted
    /// +2 days and on Sunday +1 day, so congratulations land on a weekday.
    /// Results follow the book's insertion order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.iter() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = next_occurrence(birthday.date(), today);
            let days_until = (occurrence - today).num_days();
            if !(0..=7).contains(&days_until) {
                continue;
            }

            occurrence = match occurrence.weekday() {
                Weekday::Sat => occurrence + Duration::days(2),
                Weekday::Sun => occurrence + Duration::days(1),
                _ => occurrence,
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date: occurrence,
            });
        }

        upcoming
    }
}

/// This year's occurrence of `birthday`'s month/day, or next year's if it
/// is strictly before `today`.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// `birthday` projected into `year`. A Feb 29 birthday in a common year
/// celebrates on Mar 1.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .unwrap_or(birthday)
}
