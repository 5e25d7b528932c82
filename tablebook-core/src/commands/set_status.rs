//! `bstatus`: move a visible booking to another lifecycle status.

use crate::booking::{BookingId, BookingStatus};
use crate::error::CommandError;
use crate::model::{BookingFilter, Model};

use super::{format_booking, visible_booking, Command, CommandResult, ListView};

pub const COMMAND_WORD: &str = "bstatus";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBookingStatusCommand {
    id: BookingId,
    status: BookingStatus,
}

impl SetBookingStatusCommand {
    pub fn new(id: BookingId, status: BookingStatus) -> Self {
        Self { id, status }
    }
}

impl Command for SetBookingStatusCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let id = visible_booking(model, self.id)?;
        let booking = model
            .address_book_mut()
            .set_booking_status(id, self.status)
            .map_err(|_| CommandError::BookingNotFound(id))?;
        let feedback = format!(
            "Booking {id} marked as {}: {}",
            self.status,
            format_booking(booking)
        );
        model.update_booking_filter(BookingFilter::all());
        Ok(CommandResult::new(feedback).showing(ListView::Bookings))
    }
}
