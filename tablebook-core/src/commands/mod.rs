//! User commands over a [`Model`].
//!
//! Each command receives already-parsed, already-validated arguments at
//! construction time, and [`Command::execute`] either mutates the model and
//! returns the feedback text, or fails without mutating anything.

pub mod add_booking;
pub mod edit_booking;
pub mod filter;
pub mod list;
pub mod person;
pub mod set_status;

use crate::booking::{Booking, BookingId, DATE_TIME_DISPLAY_FORMAT};
use crate::error::CommandError;
use crate::model::Model;

pub use add_booking::AddBookingCommand;
pub use edit_booking::EditBookingCommand;
pub use filter::FilterCommand;
pub use list::{ListBookingsCommand, ListPersonsCommand};
pub use person::{AddPersonCommand, FindPersonsCommand};
pub use set_status::SetBookingStatusCommand;

/// Which list a front end should show after the command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListView {
    #[default]
    None,
    Persons,
    Bookings,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub view: ListView,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            view: ListView::None,
        }
    }

    pub fn showing(mut self, view: ListView) -> Self {
        self.view = view;
        self
    }
}

pub trait Command: std::fmt::Debug {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError>;
}

/// One-line summary of a booking for feedback messages.
pub fn format_booking(booking: &Booking) -> String {
    format!(
        "Booking Date: {}; Booking Number: {}; Pax: {}; Remark: {}",
        booking.date_time().format(DATE_TIME_DISPLAY_FORMAT),
        booking.person(),
        booking.pax(),
        booking.remarks(),
    )
}

/// First booking with `id` in the *filtered* view; hidden bookings are not found.
fn visible_booking(model: &Model, id: BookingId) -> Result<BookingId, CommandError> {
    model
        .filtered_bookings()
        .into_iter()
        .find(|b| b.id() == id)
        .map(Booking::id)
        .ok_or(CommandError::BookingNotFound(id))
}
