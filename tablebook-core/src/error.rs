//! Error types for tablebook-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::booking::BookingId;
use crate::types::Phone;

/// Rejected user input for one of the validated value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Phone numbers should only contain numbers, and it should be at least 3 digits long: '{0}'")]
    Phone(String),

    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank: '{0}'")]
    Name(String),

    #[error("Emails should be of the format local-part@domain: '{0}'")]
    Email(String),

    #[error("Addresses can take any values, and it should not be blank")]
    Address,

    #[error("Tags names should be alphanumeric: '{0}'")]
    Tag(String),

    #[error("Pax must be a positive integer: '{0}'")]
    Pax(String),

    #[error("unknown booking status '{0}'; expected: UPCOMING, CANCELLED, ONGOING, COMPLETED")]
    Status(String),

    #[error("invalid date-time '{0}'; expected yyyy-MM-dd h:mm AM|PM")]
    DateTime(String),

    #[error("invalid date '{0}'; expected yyyy-MM-dd")]
    Date(String),
}

/// Violations of the aggregate root's cross-entity invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressBookError {
    #[error("a person with phone number {0} already exists")]
    DuplicatePerson(Phone),

    #[error("no person with phone number {0}")]
    UnknownPerson(Phone),

    #[error("no booking with id {0}")]
    UnknownBooking(BookingId),

    #[error("booking id {0} is already in use")]
    DuplicateBooking(BookingId),

    #[error("no booking ids are left")]
    IdsExhausted,
}

/// Failures reported to the user by a command invocation.
///
/// The `Display` text of each variant is the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("No person with the given phone number exists")]
    InvalidPerson,

    #[error("No person found with phone number: {0}")]
    PersonNotFound(Phone),

    #[error("No booking with ID {0} was found.")]
    BookingNotFound(BookingId),

    #[error("At least one field to edit must be provided.")]
    NotEdited,

    #[error("At least one filter (phone, date or status) must be provided.")]
    NoFilterCriteria,

    #[error("This person already exists in the address book")]
    DuplicatePerson,

    #[error("At least one keyword must be provided.")]
    NoKeywords,

    #[error("No more booking IDs are available.")]
    BookingIdsExhausted,
}

/// All errors that can arise from loading or saving the address book and prefs.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure, annotated with the offending path.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load, including missing required fields.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its records contradict each other.
    #[error("corrupt address book at {path}: {reason}")]
    Integrity { path: PathBuf, reason: String },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.into(),
        source,
    }
}
