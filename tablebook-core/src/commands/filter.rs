//! `filter`: narrow the booking view by phone, date and/or status.

use chrono::NaiveDate;

use crate::booking::BookingStatus;
use crate::error::CommandError;
use crate::model::{BookingFilter, Model};
use crate::types::Phone;

use super::{Command, CommandResult, ListView};

pub const COMMAND_WORD: &str = "filter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCommand {
    filter: BookingFilter,
}

impl FilterCommand {
    /// At least one criterion is required.
    pub fn new(
        phone: Option<Phone>,
        date: Option<NaiveDate>,
        status: Option<BookingStatus>,
    ) -> Result<Self, CommandError> {
        let filter = BookingFilter {
            phone,
            date,
            status,
        };
        if filter.is_all() {
            return Err(CommandError::NoFilterCriteria);
        }
        Ok(Self { filter })
    }
}

impl Command for FilterCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        if let Some(phone) = &self.filter.phone {
            if !model.address_book().has_person(phone) {
                return Err(CommandError::PersonNotFound(phone.clone()));
            }
        }

        model.update_booking_filter(self.filter.clone());

        let description = &self.filter;
        let feedback = if model.filtered_bookings().is_empty() {
            format!("No bookings found{description}.")
        } else {
            format!("Here are the bookings{description}:")
        };
        Ok(CommandResult::new(feedback).showing(ListView::Bookings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;
    use crate::commands::SetBookingStatusCommand;

    #[test]
    fn requires_a_criterion() {
        assert_eq!(
            FilterCommand::new(None, None, None).unwrap_err(),
            CommandError::NoFilterCriteria
        );
    }

    #[test]
    fn unknown_phone_fails_before_filtering() {
        let mut model = typical_model();
        add(&mut model, ALICE_PHONE, 1);
        let err = FilterCommand::new(Some("99999999".parse().unwrap()), None, None)
            .unwrap()
            .execute(&mut model)
            .unwrap_err();
        assert_eq!(err.to_string(), "No person found with phone number: 99999999");
        assert!(!model.is_booking_list_filtered());
    }

    #[test]
    fn phone_and_status_conjunction() {
        let mut model = typical_model();
        let keep = add(&mut model, ALICE_PHONE, 1);
        let cancelled = add(&mut model, ALICE_PHONE, 2);
        add(&mut model, BENSON_PHONE, 1);
        SetBookingStatusCommand::new(cancelled, BookingStatus::Cancelled)
            .execute(&mut model)
            .unwrap();

        let result = FilterCommand::new(
            Some(ALICE_PHONE.parse().unwrap()),
            None,
            Some(BookingStatus::Upcoming),
        )
        .unwrap()
        .execute(&mut model)
        .unwrap();

        let ids: Vec<_> = model.filtered_bookings().iter().map(|b| b.id()).collect();
        assert_eq!(ids, vec![keep]);
        assert_eq!(
            result.feedback,
            format!("Here are the bookings for phone number {ALICE_PHONE} with status UPCOMING:")
        );
        assert_eq!(result.view, ListView::Bookings);
    }

    #[test]
    fn date_ignores_time_of_day() {
        let mut model = typical_model();
        let id = add(&mut model, BENSON_PHONE, 4);
        let date = model.address_book().booking(id).unwrap().date_time().date();
        let result = FilterCommand::new(None, Some(date), None)
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(model.filtered_bookings().len(), 1);
        assert_eq!(
            result.feedback,
            format!("Here are the bookings on {}:", date.format("%d %b %Y"))
        );
    }

    #[test]
    fn empty_result_is_a_message_not_an_error() {
        let mut model = typical_model();
        add(&mut model, ALICE_PHONE, 1);
        let date = NaiveDate::from_ymd_opt(2023, 12, 25).unwrap();
        let result = FilterCommand::new(
            Some(BENSON_PHONE.parse().unwrap()),
            Some(date),
            Some(BookingStatus::Completed),
        )
        .unwrap()
        .execute(&mut model)
        .unwrap();
        assert_eq!(
            result.feedback,
            "No bookings found for phone number 98765432 on 25 Dec 2023 with status COMPLETED."
        );
        assert!(model.is_booking_list_filtered());
    }
}
