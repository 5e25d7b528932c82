//! `person add` and `person find`.

use crate::error::CommandError;
use crate::model::{Model, PersonFilter};
use crate::types::Person;

use super::{Command, CommandResult, ListView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    person: Person,
}

impl AddPersonCommand {
    pub fn new(person: Person) -> Self {
        Self { person }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model
            .address_book_mut()
            .add_person(self.person.clone())
            .map_err(|_| CommandError::DuplicatePerson)?;
        model.update_person_filter(PersonFilter::All);
        Ok(
            CommandResult::new(format!("New person added: {}", self.person))
                .showing(ListView::Persons),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPersonsCommand {
    keywords: Vec<String>,
}

impl FindPersonsCommand {
    pub fn new(keywords: Vec<String>) -> Result<Self, CommandError> {
        let keywords: Vec<String> = keywords
            .iter()
            .flat_map(|k| k.split_whitespace())
            .map(str::to_owned)
            .collect();
        if keywords.is_empty() {
            return Err(CommandError::NoKeywords);
        }
        Ok(Self { keywords })
    }
}

impl Command for FindPersonsCommand {
    fn execute(&self, model: &mut Model) -> Result<CommandResult, CommandError> {
        model.update_person_filter(PersonFilter::NameKeywords(self.keywords.clone()));
        let count = model.filtered_persons().len();
        Ok(CommandResult::new(format!("{count} persons listed!")).showing(ListView::Persons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;

    #[test]
    fn add_then_duplicate() {
        let mut model = typical_model();
        let carl = person("Carl Kurz", "95352563");
        let result = AddPersonCommand::new(carl.clone())
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, format!("New person added: {carl}"));
        assert_eq!(model.address_book().persons().len(), 3);

        let err = AddPersonCommand::new(carl).execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), "This person already exists in the address book");
        assert_eq!(model.address_book().persons().len(), 3);
    }

    #[test]
    fn find_counts_matches() {
        let mut model = typical_model();
        let result = FindPersonsCommand::new(vec!["alice benson".into()])
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "2 persons listed!");

        let result = FindPersonsCommand::new(vec!["Kurz".into()])
            .unwrap()
            .execute(&mut model)
            .unwrap();
        assert_eq!(result.feedback, "0 persons listed!");
    }

    #[test]
    fn find_needs_keywords() {
        assert_eq!(
            FindPersonsCommand::new(vec!["  ".into()]).unwrap_err(),
            CommandError::NoKeywords
        );
    }
}
