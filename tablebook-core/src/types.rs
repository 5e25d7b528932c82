//! Validated value types and the `Person` entity.
//!
//! Every newtype validates in `FromStr` / `TryFrom`, so a value that exists is
//! a value that passed validation. serde goes through the same checks.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::booking::BookingId;
use crate::error::ParseError;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A phone number; the unique key of a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() >= 3 && trimmed.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ParseError::Phone(s.to_owned()))
        }
    }
}

/// A person's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the name.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl FromStr for Name {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let valid = trimmed
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric())
            && trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ');
        if valid {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ParseError::Name(s.to_owned()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(ParseError::Email(s.to_owned()));
        };
        let local_ok = !local.is_empty()
            && local
                .chars()
                .all(|c| c.is_alphanumeric() || "+_.-".contains(c))
            && !local.starts_with(['+', '_', '.', '-']);
        let domain_ok = domain.split('.').all(|label| {
            !label.is_empty()
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
                && !label.starts_with('-')
                && !label.ends_with('-')
        }) && domain.rsplit('.').next().is_some_and(|tld| tld.len() >= 2);
        if local_ok && domain_ok {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ParseError::Email(s.to_owned()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Address);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

/// A descriptive label attached to a person or a booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_alphanumeric()) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err(ParseError::Tag(s.to_owned()))
        }
    }
}

/// Party size of a booking. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Pax(u32);

impl Pax {
    pub fn new(value: u32) -> Result<Self, ParseError> {
        if value == 0 {
            return Err(ParseError::Pax(value.to_string()));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for Pax {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ParseError::Pax(s.to_owned()))?;
        Self::new(value).map_err(|_| ParseError::Pax(s.to_owned()))
    }
}

impl TryFrom<u32> for Pax {
    type Error = ParseError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Pax> for u32 {
    fn from(p: Pax) -> Self {
        p.0
    }
}

impl fmt::Display for Pax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! string_newtype_impls {
    ($($ty:ident),+ $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ParseError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(v: $ty) -> Self {
                v.0
            }
        }
    )+};
}

string_newtype_impls!(Phone, Name, Email, Address, Tag);

// ---------------------------------------------------------------------------
// Person
// ---------------------------------------------------------------------------

/// A contact in the address book.
///
/// `booking_ids` is a weak back-reference: the bookings themselves live in the
/// [`AddressBook`](crate::AddressBook), which is the only code that touches
/// this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub tags: BTreeSet<Tag>,
    pub member: bool,
    pub(crate) booking_ids: BTreeSet<BookingId>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
        member: bool,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
            member,
            booking_ids: BTreeSet::new(),
        }
    }

    /// Ids of the bookings this person made.
    pub fn booking_ids(&self) -> &BTreeSet<BookingId> {
        &self.booking_ids
    }

    pub fn has_booking(&self, id: BookingId) -> bool {
        self.booking_ids.contains(&id)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.tags.iter().map(Tag::as_str).collect();
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Tags: {}; Member: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            tags.join(", "),
            if self.member { "Yes" } else { "No" },
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
