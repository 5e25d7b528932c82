//! The aggregate root: persons, bookings and the booking id generator.
//!
//! Every mutation that touches both sides of the person ↔ booking link goes
//! through this type, so the back-reference set on a [`Person`] and the
//! booking sequence can never drift apart.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::booking::{Booking, BookingEdit, BookingId, BookingIdGenerator, BookingStatus};
use crate::error::AddressBookError;
use crate::types::{Pax, Person, Phone, Tag};

/// Everything needed to create a booking except what the address book assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub phone: Phone,
    pub date_time: NaiveDateTime,
    pub tags: BTreeSet<Tag>,
    pub remarks: String,
    pub pax: Pax,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: Vec<Person>,
    bookings: Vec<Booking>,
    ids: BookingIdGenerator,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Persons
    // -----------------------------------------------------------------------

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn has_person(&self, phone: &Phone) -> bool {
        self.person_by_phone(phone).is_some()
    }

    /// Linear scan; phone numbers are unique.
    pub fn person_by_phone(&self, phone: &Phone) -> Option<&Person> {
        self.persons.iter().find(|p| &p.phone == phone)
    }

    fn person_mut(&mut self, phone: &Phone) -> Option<&mut Person> {
        self.persons.iter_mut().find(|p| &p.phone == phone)
    }

    /// Append a person. Any booking ids already on the person are dropped:
    /// back-references are only ever created by [`add_booking`](Self::add_booking).
    pub fn add_person(&mut self, mut person: Person) -> Result<(), AddressBookError> {
        if self.has_person(&person.phone) {
            return Err(AddressBookError::DuplicatePerson(person.phone));
        }
        person.booking_ids.clear();
        tracing::info!(phone = %person.phone, "person added");
        self.persons.push(person);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Bookings
    // -----------------------------------------------------------------------

    /// All bookings in insertion order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Bookings matching `predicate`, in insertion order. Never mutates.
    pub fn filtered_bookings<P>(&self, predicate: P) -> Vec<&Booking>
    where
        P: Fn(&Booking) -> bool,
    {
        self.bookings.iter().filter(|b| predicate(b)).collect()
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id() == id)
    }

    fn booking_mut(&mut self, id: BookingId) -> Result<&mut Booking, AddressBookError> {
        self.bookings
            .iter_mut()
            .find(|b| b.id() == id)
            .ok_or(AddressBookError::UnknownBooking(id))
    }

    /// The person who made `booking`.
    pub fn owner_of(&self, booking: &Booking) -> Option<&Person> {
        self.person_by_phone(booking.person())
    }

    /// Id the next created booking will receive.
    pub fn next_booking_id(&self) -> BookingId {
        self.ids.peek()
    }

    /// Create a booking for the person with `draft.phone`.
    ///
    /// The person is resolved before an id is consumed, so a failed lookup
    /// leaves the address book untouched.
    pub fn create_booking(&mut self, draft: NewBooking) -> Result<&Booking, AddressBookError> {
        if !self.has_person(&draft.phone) {
            return Err(AddressBookError::UnknownPerson(draft.phone));
        }
        let booking = Booking::new(
            &mut self.ids,
            draft.phone,
            draft.date_time,
            draft.tags,
            draft.remarks,
            draft.pax,
        )?;
        self.add_booking(booking)?;
        // add_booking just pushed it
        Ok(&self.bookings[self.bookings.len() - 1])
    }

    /// Register an already-built booking and link it to its person.
    ///
    /// Both the person's back-reference and the booking sequence are updated,
    /// or neither is. The id generator is advanced past the booking's id.
    pub fn add_booking(&mut self, booking: Booking) -> Result<(), AddressBookError> {
        let id = booking.id();
        if self.booking(id).is_some() {
            return Err(AddressBookError::DuplicateBooking(id));
        }
        let owner = self
            .person_mut(booking.person())
            .ok_or_else(|| AddressBookError::UnknownPerson(booking.person().clone()))?;
        owner.booking_ids.insert(id);
        tracing::info!(booking_id = %id, phone = %booking.person(), "booking added");
        self.bookings.push(booking);
        self.ids.restore_high_water_mark(id);
        Ok(())
    }

    pub fn edit_booking(
        &mut self,
        id: BookingId,
        edit: &BookingEdit,
    ) -> Result<&Booking, AddressBookError> {
        let booking = self.booking_mut(id)?;
        booking.apply(edit);
        tracing::info!(booking_id = %id, "booking edited");
        Ok(booking)
    }

    pub fn set_booking_status(
        &mut self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<&Booking, AddressBookError> {
        let booking = self.booking_mut(id)?;
        booking.set_status(status);
        tracing::info!(booking_id = %id, %status, "booking status changed");
        Ok(booking)
    }

    /// Advance the id generator past `max_id`. Called once after a bulk load.
    pub fn restore_high_water_mark(&mut self, max_id: BookingId) {
        self.ids.restore_high_water_mark(max_id);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
