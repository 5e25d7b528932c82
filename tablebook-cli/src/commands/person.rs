//! `tablebook person add|list|find`

use clap::{Args, Subcommand};

use tablebook_core::{
    commands::{AddPersonCommand, FindPersonsCommand, ListPersonsCommand},
    Address, Command, CommandError, Email, Name, Person, Phone, Tag,
};

#[derive(Subcommand, Debug)]
pub enum PersonCommand {
    /// Add a person to the address book.
    Add(AddArgs),

    /// List every person.
    List,

    /// List persons whose name contains any of the keywords (whole words, any case).
    Find {
        #[arg(required = true)]
        keywords: Vec<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, short = 'n')]
    pub name: Name,

    /// Unique phone number, digits only.
    #[arg(long, short = 'p')]
    pub phone: Phone,

    #[arg(long, short = 'e')]
    pub email: Email,

    #[arg(long, short = 'a')]
    pub address: Address,

    /// Person tag; repeat for several.
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    pub tags: Vec<Tag>,

    /// Mark the person as a member.
    #[arg(long)]
    pub member: bool,
}

impl PersonCommand {
    pub fn into_command(self) -> Result<Box<dyn Command>, CommandError> {
        Ok(match self {
            PersonCommand::Add(args) => Box::new(AddPersonCommand::new(Person::new(
                args.name,
                args.phone,
                args.email,
                args.address,
                args.tags.into_iter().collect(),
                args.member,
            ))),
            PersonCommand::List => Box::new(ListPersonsCommand),
            PersonCommand::Find { keywords } => Box::new(FindPersonsCommand::new(keywords)?),
        })
    }
}
