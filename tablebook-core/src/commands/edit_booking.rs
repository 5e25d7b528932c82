//! `bedit`: partial edit of a booking visible in the current booking view.

use crate::booking::{local_now, BookingEdit, BookingId};
use crate::error::CommandError;
use crate::model::{BookingFilter, Model, PersonFilter};

use super::{format_booking, visible_booking, Command, CommandResult, ListView};

pub const COMMAND_WORD: &str = "bedit";
pub const MESSAGE_EDIT_BOOKING_SUCCESS: &str = "Edited Booking: ";
pub const MESSAGE_PAST_BOOKING_WARNING: &str = "Warning: Editing a booking to a past date.\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBookingCommand {
    id: BookingId,
    edit: BookingEdit,
}

impl EditBookingCommand {
    /// Fails with [`CommandError::NotEdited`] when `edit` carries no field.
    pub fn new(id: BookingId, edit: BookingEdit) -> Result<Self, CommandError> {
        if edit.is_empty() {
            return Err(CommandError::NotEdited);
        }
        Ok(Self { id, edit })
    }
}

impl Command for EditBookingCommand {
    /// Only bookings in the filtered view are editable; run `list` first to
    /// reach a booking hidden by the active filter.
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        let id = visible_booking(model, self.id)?;
        let booking = model
            .address_book_mut()
            .edit_booking(id, &self.edit)
            .map_err(|_| CommandError::BookingNotFound(id))?;
        let summary = format_booking(booking);

        model.update_booking_filter(BookingFilter::all());
        model.update_person_filter(PersonFilter::All);

        let warning = match self.edit.date_time {
            Some(date_time) if date_time < local_now() => MESSAGE_PAST_BOOKING_WARNING,
            _ => "",
        };
        Ok(
            CommandResult::new(format!("{warning}{MESSAGE_EDIT_BOOKING_SUCCESS}{summary}"))
                .showing(ListView::Bookings),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::BookingStatus;
    use crate::commands::test_support::*;
    use crate::types::Pax;

    fn pax_only(n: u32) -> BookingEdit {
        BookingEdit {
            pax: Some(Pax::new(n).unwrap()),
            ..BookingEdit::default()
        }
    }

    #[test]
    fn empty_edit_rejected_at_construction() {
        let err = EditBookingCommand::new(BookingId(1), BookingEdit::default()).unwrap_err();
        assert_eq!(err.to_string(), "At least one field to edit must be provided.");
    }

    #[test]
    fn pax_only_edit_is_partial() {
        let mut model = typical_model();
        let id = add(&mut model, ALICE_PHONE, 2);
        let before = model.address_book().booking(id).unwrap().clone();

        let result = EditBookingCommand::new(id, pax_only(9))
            .unwrap()
            .execute(&mut model)
            .unwrap();

        let after = model.address_book().booking(id).unwrap();
        assert_eq!(after.pax().get(), 9);
        assert_eq!(after.date_time(), before.date_time());
        assert_eq!(after.remarks(), before.remarks());
        assert_eq!(
            result.feedback,
            format!("{MESSAGE_EDIT_BOOKING_SUCCESS}{}", format_booking(after))
        );
    }

    #[test]
    fn past_date_edit_warns() {
        let mut model = typical_model();
        let id = add(&mut model, ALICE_PHONE, 2);
        let edit = BookingEdit {
            date_time: Some(days_from_now(-2)),
            ..BookingEdit::default()
        };
        let result = EditBookingCommand::new(id, edit)
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert!(result
            .feedback
            .starts_with("Warning: Editing a booking to a past date.\nEdited Booking: "));
    }

    #[test]
    fn future_date_and_remark_edit_has_no_warning() {
        let mut model = typical_model();
        let id = add(&mut model, ALICE_PHONE, 2);
        let edit = BookingEdit {
            date_time: Some(days_from_now(5)),
            remarks: Some("Allergic to nuts".into()),
            ..BookingEdit::default()
        };
        let result = EditBookingCommand::new(id, edit)
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert!(result.feedback.starts_with(MESSAGE_EDIT_BOOKING_SUCCESS));
        assert_eq!(model.address_book().booking(id).unwrap().remarks(), "Allergic to nuts");
    }

    #[test]
    fn hidden_booking_is_not_editable() {
        let mut model = typical_model();
        let id = add(&mut model, ALICE_PHONE, 2);
        model.update_booking_filter(BookingFilter {
            status: Some(BookingStatus::Cancelled),
            ..BookingFilter::all()
        });

        let err = EditBookingCommand::new(id, pax_only(3))
            .unwrap()
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), format!("No booking with ID {id} was found."));
        assert_eq!(model.address_book().booking(id).unwrap().pax().get(), 2);
        assert!(model.is_booking_list_filtered(), "failed edit keeps the filter");
    }

    #[test]
    fn successful_edit_clears_booking_filter() {
        let mut model = typical_model();
        let id = add(&mut model, ALICE_PHONE, 2);
        add(&mut model, BENSON_PHONE, 2);
        model.update_booking_filter(BookingFilter {
            phone: Some(ALICE_PHONE.parse().unwrap()),
            ..BookingFilter::all()
        });

        EditBookingCommand::new(id, pax_only(4))
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert!(!model.is_booking_list_filtered());
        assert_eq!(model.filtered_bookings().len(), 2);
    }

    #[test]
    fn unknown_id_not_found() {
        let mut model = typical_model();
        add(&mut model, ALICE_PHONE, 2);
        let err = EditBookingCommand::new(BookingId(77), pax_only(3))
            .unwrap()
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err, CommandError::BookingNotFound(BookingId(77)));
    }
}
