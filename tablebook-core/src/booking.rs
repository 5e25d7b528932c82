//! The booking record, its lifecycle status and its id generator.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{AddressBookError, ParseError};
use crate::types::{Pax, Person, Phone, Tag};

/// Display pattern shared by every user-facing booking date (`2025-04-01 9:00 PM`).
pub const DATE_TIME_DISPLAY_FORMAT: &str = "%Y-%m-%d %-I:%M %p";

/// Input pattern accepted for booking date-times.
pub const DATE_TIME_INPUT_FORMAT: &str = "%Y-%m-%d %I:%M %p";

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Current local wall-clock time, the reference for "past" bookings.
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a user-supplied booking date-time.
///
/// Accepts `yyyy-MM-dd h:mm AM|PM` and falls back to ISO-8601 local date-times
/// with or without seconds.
pub fn parse_date_time(s: &str) -> Result<NaiveDateTime, ParseError> {
    let trimmed = s.trim();
    NaiveDateTime::parse_from_str(&trimmed.to_ascii_uppercase(), DATE_TIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ParseError::DateTime(s.to_owned()))
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s.trim(), DATE_INPUT_FORMAT).map_err(|_| ParseError::Date(s.to_owned()))
}

// ---------------------------------------------------------------------------
// BookingId + generator
// ---------------------------------------------------------------------------

/// External reference key of a booking. Assigned once, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u32);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for BookingId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl FromStr for BookingId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Monotonic id source owned by the [`AddressBook`](crate::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingIdGenerator {
    next: u32,
}

impl BookingIdGenerator {
    pub const FIRST_ID: u32 = 1;

    pub fn new() -> Self {
        Self {
            next: Self::FIRST_ID,
        }
    }

    /// Hand out the next id. `u32::MAX` is never handed out; reaching it
    /// exhausts the generator.
    pub fn next_id(&mut self) -> Result<BookingId, AddressBookError> {
        let following = self
            .next
            .checked_add(1)
            .ok_or(AddressBookError::IdsExhausted)?;
        let id = BookingId(self.next);
        self.next = following;
        Ok(id)
    }

    /// The id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> BookingId {
        BookingId(self.next)
    }

    /// Advance past `max_id` so restored bookings never collide with new ones.
    /// Never moves the counter backwards.
    pub fn restore_high_water_mark(&mut self, max_id: BookingId) {
        self.next = self.next.max(max_id.0.saturating_add(1));
    }
}

impl Default for BookingIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle tag of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    #[default]
    Upcoming,
    Cancelled,
    Ongoing,
    Completed,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Upcoming,
        BookingStatus::Cancelled,
        BookingStatus::Ongoing,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "UPCOMING",
            BookingStatus::Cancelled => "CANCELLED",
            BookingStatus::Ongoing => "ONGOING",
            BookingStatus::Completed => "COMPLETED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive on input; unknown names are an error, never a default.
impl FromStr for BookingStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| ParseError::Status(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Edit descriptor
// ---------------------------------------------------------------------------

/// Partial update of a booking. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingEdit {
    pub date_time: Option<NaiveDateTime>,
    pub pax: Option<Pax>,
    pub remarks: Option<String>,
}

impl BookingEdit {
    pub fn is_empty(&self) -> bool {
        self.date_time.is_none() && self.pax.is_none() && self.remarks.is_none()
    }
}

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// A reservation made by exactly one person.
///
/// The person is referenced by phone number; the owning [`Person`] carries the
/// matching back-reference in its booking id set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    id: BookingId,
    date_time: NaiveDateTime,
    made_date_time: NaiveDateTime,
    person: Phone,
    tags: BTreeSet<Tag>,
    status: BookingStatus,
    remarks: String,
    pax: Pax,
}

impl Booking {
    /// A fresh booking: consumes an id, stamps the creation time, starts UPCOMING.
    pub fn new(
        ids: &mut BookingIdGenerator,
        person: Phone,
        date_time: NaiveDateTime,
        tags: BTreeSet<Tag>,
        remarks: impl Into<String>,
        pax: Pax,
    ) -> Result<Self, AddressBookError> {
        Ok(Self {
            id: ids.next_id()?,
            date_time,
            made_date_time: local_now(),
            person,
            tags,
            status: BookingStatus::Upcoming,
            remarks: remarks.into(),
            pax,
        })
    }

    /// Rebuild a persisted booking exactly, without touching any id generator.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: BookingId,
        person: Phone,
        date_time: NaiveDateTime,
        made_date_time: NaiveDateTime,
        tags: BTreeSet<Tag>,
        status: BookingStatus,
        remarks: String,
        pax: Pax,
    ) -> Self {
        Self {
            id,
            date_time,
            made_date_time,
            person,
            tags,
            status,
            remarks,
            pax,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn made_date_time(&self) -> NaiveDateTime {
        self.made_date_time
    }

    /// Phone number of the person who made the booking.
    pub fn person(&self) -> &Phone {
        &self.person
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    pub fn pax(&self) -> Pax {
        self.pax
    }

    pub fn set_status(&mut self, status: BookingStatus) {
        self.status = status;
    }

    /// Apply only the fields present in `edit`.
    pub fn apply(&mut self, edit: &BookingEdit) {
        if let Some(date_time) = edit.date_time {
            self.date_time = date_time;
        }
        if let Some(pax) = edit.pax {
            self.pax = pax;
        }
        if let Some(remarks) = &edit.remarks {
            self.remarks.clone_from(remarks);
        }
    }

    /// Strictly earlier than `now`.
    pub fn is_before(&self, now: NaiveDateTime) -> bool {
        self.date_time < now
    }

    /// Full rendering of the booking alongside the person who made it.
    pub fn display_with<'a>(&'a self, person: &'a Person) -> BookingDisplay<'a> {
        BookingDisplay {
            booking: self,
            person,
        }
    }
}

/// See [`Booking::display_with`].
pub struct BookingDisplay<'a> {
    booking: &'a Booking,
    person: &'a Person,
}

impl fmt::Display for BookingDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.booking;
        let tags = if b.tags.is_empty() {
            "No Tags".to_string()
        } else {
            let names: Vec<&str> = b.tags.iter().map(Tag::as_str).collect();
            format!("[{}]", names.join(", "))
        };
        write!(
            f,
            "Booking ID: {} Booking Date: {} Booked On: {} Booked By: {} Tags: {} Status: {} Remarks: {} Pax: {}",
            b.id,
            b.date_time.format(DATE_TIME_DISPLAY_FORMAT),
            b.made_date_time.format(DATE_TIME_DISPLAY_FORMAT),
            self.person,
            tags,
            b.status,
            b.remarks,
            b.pax,
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
