//! Argument parsing for every tablebook command.
//!
//! clap does the tokenizing and type validation; each args struct then builds
//! the matching `tablebook_core` command.

pub mod booking;
pub mod filter;
pub mod person;
pub mod shell;

use clap::{Subcommand, ValueEnum};
use tablebook_core::commands::{add_booking, edit_booking, filter as filter_booking, set_status};
use tablebook_core::{Command, CommandError};

use booking::{BeditArgs, BookArgs, BstatusArgs};
use filter::{FilterArgs, ListArgs};
use person::PersonCommand;

/// The commands shared by one-shot invocations and `shell` lines.
#[derive(Subcommand, Debug)]
pub enum AppCommand {
    /// Add, list and find persons.
    Person {
        #[command(subcommand)]
        command: PersonCommand,
    },

    /// Add a booking for the person with the given phone number.
    #[command(name = add_booking::COMMAND_WORD)]
    Book(BookArgs),

    /// Edit a booking in the current booking view.
    #[command(name = edit_booking::COMMAND_WORD)]
    Bedit(BeditArgs),

    /// Change the status of a booking in the current booking view.
    #[command(name = set_status::COMMAND_WORD)]
    Bstatus(BstatusArgs),

    /// Show bookings matching a phone number, date and/or status.
    #[command(name = filter_booking::COMMAND_WORD)]
    Filter(FilterArgs),

    /// Show all bookings.
    List(ListArgs),
}

/// How `filter` and `list` print the bookings they show.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// One table row per booking.
    #[default]
    Table,
    /// Every field of every booking, one line each, with the full person.
    Full,
    /// A single JSON object with the feedback and the bookings.
    Json,
}

/// A core command plus how its listing should be printed.
#[derive(Debug)]
pub struct Prepared {
    pub command: Box<dyn Command>,
    pub format: Format,
}

impl AppCommand {
    pub fn prepare(self) -> Result<Prepared, CommandError> {
        let (command, format): (Box<dyn Command>, Format) = match self {
            AppCommand::Person { command } => (command.into_command()?, Format::Table),
            AppCommand::Book(args) => (Box::new(args.into_command()), Format::Table),
            AppCommand::Bedit(args) => (Box::new(args.into_command()?), Format::Table),
            AppCommand::Bstatus(args) => (Box::new(args.into_command()), Format::Table),
            AppCommand::Filter(args) => {
                let format = args.format;
                (Box::new(args.into_command()?), format)
            }
            AppCommand::List(args) => {
                let format = args.format;
                (Box::new(args.into_command()), format)
            }
        };
        Ok(Prepared { command, format })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[derive(Parser, Debug)]
    struct Harness {
        #[command(subcommand)]
        command: AppCommand,
    }

    fn prepare(args: &[&str]) -> Prepared {
        Harness::try_parse_from(std::iter::once("t").chain(args.iter().copied()))
            .unwrap()
            .command
            .prepare()
            .unwrap()
    }

    #[test]
    fn list_keeps_its_output_format() {
        assert_eq!(prepare(&["list"]).format, Format::Table);
        assert_eq!(prepare(&["list", "--format", "json"]).format, Format::Json);
        assert_eq!(prepare(&["list", "--format", "full"]).format, Format::Full);
    }

    #[test]
    fn filter_keeps_its_output_format() {
        let prepared = prepare(&["filter", "--status", "upcoming", "--format", "json"]);
        assert_eq!(prepared.format, Format::Json);
    }

    #[test]
    fn subcommands_use_the_core_command_words() {
        for word in [
            add_booking::COMMAND_WORD,
            edit_booking::COMMAND_WORD,
            set_status::COMMAND_WORD,
            filter_booking::COMMAND_WORD,
        ] {
            assert!(Harness::command().find_subcommand(word).is_some(), "{word}");
        }
    }
}
