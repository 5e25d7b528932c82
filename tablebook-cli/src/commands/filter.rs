//! `tablebook filter` and `tablebook list`.

use chrono::NaiveDate;
use clap::Args;

use tablebook_core::{
    booking::parse_date,
    commands::{FilterCommand, ListBookingsCommand},
    BookingStatus, CommandError, Phone,
};

use super::Format;

/// At least one of `--phone`, `--date`, `--status` is required.
#[derive(Args, Debug)]
pub struct FilterArgs {
    #[arg(long, short = 'p')]
    pub phone: Option<Phone>,

    /// Calendar date, yyyy-MM-dd.
    #[arg(long, short = 'd', value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// UPCOMING | CANCELLED | ONGOING | COMPLETED (any case).
    #[arg(long, short = 's')]
    pub status: Option<BookingStatus>,

    /// How to print the matching bookings.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

impl FilterArgs {
    pub fn into_command(self) -> Result<FilterCommand, CommandError> {
        FilterCommand::new(self.phone, self.date, self.status)
    }
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// How to print the matching bookings.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,
}

impl ListArgs {
    pub fn into_command(self) -> ListBookingsCommand {
        ListBookingsCommand
    }
}
