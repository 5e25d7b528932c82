//! Terminal and JSON rendering of the person and booking lists.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use tablebook_core::{
    booking::DATE_TIME_DISPLAY_FORMAT, Booking, BookingStatus, ListView, Model, Person, Tag,
};

use crate::commands::Format;

#[derive(Tabled)]
struct PersonRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "phone")]
    phone: String,
    #[tabled(rename = "email")]
    email: String,
    #[tabled(rename = "address")]
    address: String,
    #[tabled(rename = "tags")]
    tags: String,
    #[tabled(rename = "member")]
    member: String,
    #[tabled(rename = "bookings")]
    bookings: usize,
}

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "id")]
    id: u32,
    #[tabled(rename = "date")]
    date: String,
    #[tabled(rename = "booked by")]
    booked_by: String,
    #[tabled(rename = "pax")]
    pax: u32,
    #[tabled(rename = "status")]
    status: String,
    #[tabled(rename = "tags")]
    tags: String,
    #[tabled(rename = "remarks")]
    remarks: String,
}

#[derive(Serialize)]
struct BookingListJson<'a> {
    feedback: &'a str,
    bookings: Vec<BookingJson>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookingJson {
    id: u32,
    phone: String,
    name: Option<String>,
    booking_date: String,
    booking_made_date: String,
    pax: u32,
    status: BookingStatus,
    tags: Vec<String>,
    remarks: String,
}

/// Print the feedback, then the list `view` asks for.
pub fn print_outcome(model: &Model, feedback: &str, view: ListView, format: Format) -> Result<()> {
    if format == Format::Json {
        return print_bookings_json(model, feedback);
    }
    println!("{feedback}");
    match (view, format) {
        (ListView::None, _) => {}
        (ListView::Persons, _) => print_persons(model),
        (ListView::Bookings, Format::Full) => print_bookings_full(model),
        (ListView::Bookings, _) => print_bookings(model),
    }
    Ok(())
}

fn print_persons(model: &Model) {
    let persons = model.filtered_persons();
    if persons.is_empty() {
        println!("No persons to show.");
        return;
    }
    let rows: Vec<PersonRow> = persons.into_iter().map(person_row).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn print_bookings(model: &Model) {
    let bookings = model.filtered_bookings();
    if bookings.is_empty() {
        println!("No bookings to show.");
        return;
    }
    let rows: Vec<BookingRow> = bookings
        .into_iter()
        .map(|booking| booking_row(model, booking))
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn print_bookings_full(model: &Model) {
    let book = model.address_book();
    for (index, booking) in model.filtered_bookings().into_iter().enumerate() {
        match book.owner_of(booking) {
            Some(person) => println!("{}. {}", index + 1, booking.display_with(person)),
            None => tracing::warn!(booking_id = %booking.id(), "booking has no owner"),
        }
    }
}

fn print_bookings_json(model: &Model, feedback: &str) -> Result<()> {
    let book = model.address_book();
    let payload = BookingListJson {
        feedback,
        bookings: model
            .filtered_bookings()
            .into_iter()
            .map(|b| BookingJson {
                id: b.id().0,
                phone: b.person().to_string(),
                name: book.owner_of(b).map(|p| p.name.to_string()),
                booking_date: b.date_time().format("%Y-%m-%dT%H:%M:%S").to_string(),
                booking_made_date: b.made_date_time().format("%Y-%m-%dT%H:%M:%S").to_string(),
                pax: b.pax().get(),
                status: b.status(),
                tags: b.tags().iter().map(Tag::to_string).collect(),
                remarks: b.remarks().to_string(),
            })
            .collect(),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&payload).context("failed to serialize bookings JSON")?
    );
    Ok(())
}

fn person_row(person: &Person) -> PersonRow {
    PersonRow {
        name: person.name.to_string(),
        phone: person.phone.to_string(),
        email: person.email.to_string(),
        address: person.address.to_string(),
        tags: join_tags(person.tags.iter()),
        member: if person.member { "yes" } else { "no" }.to_string(),
        bookings: person.booking_ids().len(),
    }
}

fn booking_row(model: &Model, booking: &Booking) -> BookingRow {
    let booked_by = match model.address_book().owner_of(booking) {
        Some(person) => format!("{} ({})", person.name, person.phone),
        None => booking.person().to_string(),
    };
    BookingRow {
        id: booking.id().0,
        date: booking.date_time().format(DATE_TIME_DISPLAY_FORMAT).to_string(),
        booked_by,
        pax: booking.pax().get(),
        status: status_label(booking.status()),
        tags: join_tags(booking.tags().iter()),
        remarks: booking.remarks().to_string(),
    }
}

fn status_label(status: BookingStatus) -> String {
    match status {
        BookingStatus::Upcoming => status.as_str().cyan().bold().to_string(),
        BookingStatus::Ongoing => status.as_str().yellow().bold().to_string(),
        BookingStatus::Completed => status.as_str().green().bold().to_string(),
        BookingStatus::Cancelled => status.as_str().bright_black().to_string(),
    }
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a Tag>) -> String {
    tags.map(Tag::as_str).collect::<Vec<_>>().join(", ")
}
