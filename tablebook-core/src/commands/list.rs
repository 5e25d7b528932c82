//! `list` and `person list`: clear the active filters.

use crate::error::CommandError;
use crate::model::{BookingFilter, Model, PersonFilter};

use super::{Command, CommandResult, ListView};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListBookingsCommand;

impl Command for ListBookingsCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_booking_filter(BookingFilter::all());
        Ok(CommandResult::new("Listed all bookings").showing(ListView::Bookings))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPersonsCommand;

impl Command for ListPersonsCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_person_filter(PersonFilter::All);
        Ok(CommandResult::new("Listed all persons").showing(ListView::Persons))
    }
}
