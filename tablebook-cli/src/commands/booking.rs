//! `tablebook book`, `tablebook bedit` and `tablebook bstatus`.

use chrono::NaiveDateTime;
use clap::Args;

use tablebook_core::{
    booking::parse_date_time,
    commands::{AddBookingCommand, EditBookingCommand, SetBookingStatusCommand},
    BookingEdit, BookingId, BookingStatus, CommandError, Pax, Phone, Tag,
};

#[derive(Args, Debug)]
pub struct BookArgs {
    /// Phone number of the person making the booking.
    #[arg(long, short = 'p')]
    pub phone: Phone,

    /// Booking date and time, e.g. "2025-04-01 7:00 PM".
    #[arg(long, short = 'd', value_parser = parse_date_time)]
    pub date: NaiveDateTime,

    /// Party size (positive).
    #[arg(long, short = 'x')]
    pub pax: Pax,

    /// Free-text remark, e.g. "Birthday celebration".
    #[arg(long, short = 'r')]
    pub remark: Option<String>,

    /// Booking tag; repeat for several.
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    pub tags: Vec<Tag>,
}

impl BookArgs {
    pub fn into_command(self) -> AddBookingCommand {
        AddBookingCommand::new(self.phone, self.date, self.remark, self.pax)
            .with_tags(self.tags.into_iter().collect())
    }
}

#[derive(Args, Debug)]
pub struct BeditArgs {
    /// Id of the booking to edit.
    pub id: BookingId,

    /// New date and time.
    #[arg(long, short = 'd', value_parser = parse_date_time)]
    pub date: Option<NaiveDateTime>,

    /// New party size.
    #[arg(long, short = 'x')]
    pub pax: Option<Pax>,

    /// New remark; an empty string clears it.
    #[arg(long, short = 'r')]
    pub remark: Option<String>,
}

impl BeditArgs {
    pub fn into_command(self) -> Result<EditBookingCommand, CommandError> {
        EditBookingCommand::new(
            self.id,
            BookingEdit {
                date_time: self.date,
                pax: self.pax,
                remarks: self.remark,
            },
        )
    }
}

#[derive(Args, Debug)]
pub struct BstatusArgs {
    /// Id of the booking.
    pub id: BookingId,

    /// UPCOMING | CANCELLED | ONGOING | COMPLETED (any case).
    pub status: BookingStatus,
}

impl BstatusArgs {
    pub fn into_command(self) -> SetBookingStatusCommand {
        SetBookingStatusCommand::new(self.id, self.status)
    }
}
