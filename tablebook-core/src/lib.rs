//! Tablebook core library: contacts, bookings, commands, JSON storage.
//!
//! - [`types`]: validated value types and [`Person`]
//! - [`booking`]: [`Booking`], [`BookingStatus`], [`BookingEdit`], id generation
//! - [`address_book`]: the [`AddressBook`] aggregate root
//! - [`model`]: [`Model`], the address book plus its active filters
//! - [`commands`]: user commands and their feedback messages
//! - [`storage`] / [`prefs`]: persistence
//! - [`error`]: error enums

pub mod address_book;
pub mod booking;
pub mod commands;
pub mod error;
pub mod model;
pub mod prefs;
pub mod storage;
pub mod types;

pub use address_book::{AddressBook, NewBooking};
pub use booking::{Booking, BookingEdit, BookingId, BookingIdGenerator, BookingStatus};
pub use commands::{Command, CommandResult, ListView};
pub use error::{AddressBookError, CommandError, ParseError, StorageError};
pub use model::{BookingFilter, Model, PersonFilter};
pub use types::{Address, Email, Name, Pax, Person, Phone, Tag};
