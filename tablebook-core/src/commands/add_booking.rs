//! `book`: create a booking for an existing person.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::address_book::NewBooking;
use crate::booking::local_now;
use crate::error::{AddressBookError, CommandError};
use crate::model::{Model, PersonFilter};
use crate::types::{Pax, Phone, Tag};

use super::{format_booking, Command, CommandResult, ListView};

pub const COMMAND_WORD: &str = "book";
pub const MESSAGE_SUCCESS: &str = "New booking added: \n";
pub const MESSAGE_PAST_BOOKING_WARNING: &str = "Warning: You are adding a booking for a past date!";

/// Holds the raw booking inputs; the booking itself is only built once the
/// phone number has been resolved against the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddBookingCommand {
    phone: Phone,
    date_time: NaiveDateTime,
    remarks: Option<String>,
    pax: Pax,
    tags: BTreeSet<Tag>,
}

impl AddBookingCommand {
    pub fn new(phone: Phone, date_time: NaiveDateTime, remarks: Option<String>, pax: Pax) -> Self {
        Self {
            phone,
            date_time,
            remarks,
            pax,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_tags(mut self, tags: BTreeSet<Tag>) -> Self {
        self.tags = tags;
        self
    }
}

impl Command for AddBookingCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let draft = NewBooking {
            phone: self.phone.clone(),
            date_time: self.date_time,
            tags: self.tags.clone(),
            remarks: self.remarks.clone().unwrap_or_default(),
            pax: self.pax,
        };
        let booking = model
            .address_book_mut()
            .create_booking(draft)
            .map_err(|err| {
                tracing::debug!(error = %err, "booking rejected");
                match err {
                    AddressBookError::IdsExhausted => CommandError::BookingIdsExhausted,
                    _ => CommandError::InvalidPerson,
                }
            })?;
        let summary = format_booking(booking);
        let past = booking.is_before(local_now());
        if past {
            tracing::warn!(booking_id = %booking.id(), "booking added for a past date");
        }

        model.update_person_filter(PersonFilter::All);

        let success = format!("{MESSAGE_SUCCESS}{summary}");
        let feedback = if past {
            format!("{MESSAGE_PAST_BOOKING_WARNING}\n{success}")
        } else {
            success
        };
        Ok(CommandResult::new(feedback).showing(ListView::Persons))
    }
}
