//! View state over the address book: the active person and booking filters.

use std::fmt;

use chrono::NaiveDate;

use crate::address_book::AddressBook;
use crate::booking::{Booking, BookingStatus};
use crate::types::{Person, Phone};

/// Which persons the person list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonFilter {
    #[default]
    All,
    /// Any word of the name equals one of the keywords, ignoring case.
    NameKeywords(Vec<String>),
}

impl PersonFilter {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            PersonFilter::All => true,
            PersonFilter::NameKeywords(keywords) => person
                .name
                .words()
                .any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word))),
        }
    }
}

/// Conjunction of the optional booking criteria. Empty means "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Bookings whose id is in this person's back-reference set.
    pub phone: Option<Phone>,
    /// Calendar date of the scheduled time; time of day is ignored.
    pub date: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.phone.is_none() && self.date.is_none() && self.status.is_none()
    }

    /// Evaluated against the live address book, so bookings added to a
    /// filtered person later are picked up by the same filter.
    pub fn matches(&self, booking: &Booking, book: &AddressBook) -> bool {
        let phone_ok = self.phone.as_ref().is_none_or(|phone| {
            book.person_by_phone(phone)
                .is_some_and(|p| p.has_booking(booking.id()))
        });
        let date_ok = self
            .date
            .is_none_or(|date| booking.date_time().date() == date);
        let status_ok = self.status.is_none_or(|status| booking.status() == status);
        phone_ok && date_ok && status_ok
    }
}

/// Human-readable clause list, e.g. ` for phone number 9876 on 25 Dec 2023 with status UPCOMING`.
impl fmt::Display for BookingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(phone) = &self.phone {
            write!(f, " for phone number {phone}")?;
        }
        if let Some(date) = self.date {
            write!(f, " on {}", date.format("%d %b %Y"))?;
        }
        if let Some(status) = self.status {
            write!(f, " with status {status}")?;
        }
        Ok(())
    }
}

/// The address book plus the filters currently applied to its two lists.
#[derive(Debug, Clone, Default)]
pub struct Model {
    address_book: AddressBook,
    person_filter: PersonFilter,
    booking_filter: BookingFilter,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            person_filter: PersonFilter::All,
            booking_filter: BookingFilter::all(),
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn address_book_mut(&mut self) -> &mut AddressBook {
        &mut self.address_book
    }

    pub fn person_filter(&self) -> &PersonFilter {
        &self.person_filter
    }

    pub fn update_person_filter(&mut self, filter: PersonFilter) {
        self.person_filter = filter;
    }

    pub fn filtered_persons(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.person_filter.matches(p))
            .collect()
    }

    pub fn booking_filter(&self) -> &BookingFilter {
        &self.booking_filter
    }

    pub fn update_booking_filter(&mut self, filter: BookingFilter) {
        tracing::debug!(filter = ?filter, "booking filter updated");
        self.booking_filter = filter;
    }

    pub fn is_booking_list_filtered(&self) -> bool {
        !self.booking_filter.is_all()
    }

    /// Bookings visible under the active booking filter, in insertion order.
    pub fn filtered_bookings(&self) -> Vec<&Booking> {
        let book = &self.address_book;
        book.filtered_bookings(|b| self.booking_filter.matches(b, book))
    }
}
