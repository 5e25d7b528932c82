//! JSON persistence of the address book.
//!
//! # Storage layout
//!
//! ```text
//! ~/.tablebook/
//!   preferences.json   (see `prefs`)
//!   addressbook.json   (default data file)
//! ```
//!
//! # Document
//!
//! ```text
//! { "persons":  [ { "name", "phone", "email", "address", "tags": [{"tagName"}],
//!                   "member", "bookingIds": [int] } ],
//!   "bookings": [ { "bookingId", "bookingDate", "bookingMadeDate", "tags",
//!                   "status", "remarks", "pax" } ] }
//! ```
//!
//! Bookings carry no person field: ownership is restored from the persons'
//! `bookingIds`. Every record field is required.
//!
//! Like the prefs, every function has an explicit-path form; the data file
//! path itself is resolved by the caller.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::address_book::AddressBook;
use crate::booking::{Booking, BookingId, BookingStatus};
use crate::error::{io_err, StorageError};
use crate::types::{Address, Email, Name, Pax, Person, Phone, Tag};

pub const DATA_DIR: &str = ".tablebook";
pub const DEFAULT_ADDRESS_BOOK_FILE: &str = "addressbook.json";

/// `<home>/.tablebook/`
pub fn data_root_at(home: &Path) -> PathBuf {
    home.join(DATA_DIR)
}

/// `<home>/.tablebook/addressbook.json`, no I/O.
pub fn default_address_book_path_at(home: &Path) -> PathBuf {
    data_root_at(home).join(DEFAULT_ADDRESS_BOOK_FILE)
}

pub(crate) fn home() -> Result<PathBuf, StorageError> {
    dirs::home_dir().ok_or(StorageError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// 1. Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagRecord {
    tag_name: Tag,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRecord {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    tags: Vec<TagRecord>,
    member: bool,
    booking_ids: Vec<BookingId>,
}

/// On-disk booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingRecord {
    booking_id: BookingId,
    #[serde(with = "local_date_time")]
    booking_date: NaiveDateTime,
    #[serde(with = "local_date_time")]
    booking_made_date: NaiveDateTime,
    tags: Vec<TagRecord>,
    status: BookingStatus,
    remarks: String,
    pax: Pax,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct AddressBookDocument {
    persons: Vec<PersonRecord>,
    bookings: Vec<BookingRecord>,
}

fn tag_records(tags: &BTreeSet<Tag>) -> Vec<TagRecord> {
    tags.iter()
        .map(|t| TagRecord { tag_name: t.clone() })
        .collect()
}

fn tag_set(records: Vec<TagRecord>) -> BTreeSet<Tag> {
    records.into_iter().map(|r| r.tag_name).collect()
}

impl From<&Person> for PersonRecord {
    fn from(p: &Person) -> Self {
        Self {
            name: p.name.clone(),
            phone: p.phone.clone(),
            email: p.email.clone(),
            address: p.address.clone(),
            tags: tag_records(&p.tags),
            member: p.member,
            booking_ids: p.booking_ids().iter().copied().collect(),
        }
    }
}

impl From<&Booking> for BookingRecord {
    fn from(b: &Booking) -> Self {
        Self {
            booking_id: b.id(),
            booking_date: b.date_time(),
            booking_made_date: b.made_date_time(),
            tags: tag_records(b.tags()),
            status: b.status(),
            remarks: b.remarks().to_owned(),
            pax: b.pax(),
        }
    }
}

impl BookingRecord {
    fn into_booking(self, owner: Phone) -> Booking {
        Booking::restore(
            self.booking_id,
            owner,
            self.booking_date,
            self.booking_made_date,
            tag_set(self.tags),
            self.status,
            self.remarks,
            self.pax,
        )
    }
}

/// ISO-8601 local date-time; seconds are optional on read.
mod local_date_time {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
    const READ_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        READ_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&raw, fmt).ok())
            .ok_or_else(|| de::Error::custom(format!("invalid local date-time '{raw}'")))
    }
}

// ---------------------------------------------------------------------------
// 2. Conversion
// ---------------------------------------------------------------------------

fn to_document(book: &AddressBook) -> AddressBookDocument {
    AddressBookDocument {
        persons: book.persons().iter().map(PersonRecord::from).collect(),
        bookings: book.bookings().iter().map(BookingRecord::from).collect(),
    }
}

/// Rebuild the aggregate, checking the person ↔ booking links both ways.
fn from_document(path: &Path, doc: AddressBookDocument) -> Result<AddressBook, StorageError> {
    let integrity = |reason: String| StorageError::Integrity {
        path: path.to_path_buf(),
        reason,
    };

    let mut owners: BTreeMap<BookingId, Phone> = BTreeMap::new();
    let mut persons = Vec::with_capacity(doc.persons.len());
    for record in doc.persons {
        for id in &record.booking_ids {
            if let Some(previous) = owners.insert(*id, record.phone.clone()) {
                return Err(integrity(format!(
                    "booking {id} is claimed by both {previous} and {}",
                    record.phone
                )));
            }
        }
        persons.push(Person::new(
            record.name,
            record.phone,
            record.email,
            record.address,
            tag_set(record.tags),
            record.member,
        ));
    }

    let mut book = AddressBook::new();
    for person in persons {
        let phone = person.phone.clone();
        book.add_person(person)
            .map_err(|_| integrity(format!("duplicate person with phone {phone}")))?;
    }

    let mut max_id = None;
    for record in doc.bookings {
        let id = record.booking_id;
        if id.0 == u32::MAX {
            return Err(integrity(format!("booking id {id} leaves no id for new bookings")));
        }
        let owner = owners
            .remove(&id)
            .ok_or_else(|| integrity(format!("booking {id} has no owner")))?;
        book.add_booking(record.into_booking(owner))
            .map_err(|err| integrity(err.to_string()))?;
        max_id = max_id.max(Some(id));
    }

    if let Some((id, phone)) = owners.into_iter().next() {
        return Err(integrity(format!(
            "person {phone} references missing booking {id}"
        )));
    }

    if let Some(max_id) = max_id {
        book.restore_high_water_mark(max_id);
    }
    Ok(book)
}

// ---------------------------------------------------------------------------
// 3. Load / save
// ---------------------------------------------------------------------------

/// Parse an address book from a JSON string. `path` is only used in errors.
pub fn from_json(path: &Path, json: &str) -> Result<AddressBook, StorageError> {
    let doc: AddressBookDocument =
        serde_json::from_str(json).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    from_document(path, doc)
}

pub fn to_json(book: &AddressBook) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(&to_document(book))?)
}

/// Load the address book at `path`; a missing file is an empty address book.
pub fn load_at(path: &Path) -> Result<AddressBook, StorageError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no data file, starting with an empty address book");
        return Ok(AddressBook::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let book = from_json(path, &contents)?;
    tracing::debug!(
        path = %path.display(),
        persons = book.persons().len(),
        bookings = book.bookings().len(),
        "address book loaded"
    );
    Ok(book)
}

/// Overwrite `path` with the whole address book.
///
/// Write flow: serialize → `.json.tmp` sibling → `rename`.
pub fn save_at(path: &Path, book: &AddressBook) -> Result<(), StorageError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    let json = to_json(book)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| io_err(path, e))?;
    tracing::info!(path = %path.display(), "address book saved");
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
