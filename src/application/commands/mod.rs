// src/application/commands/mod.rs
//
// Console commands
//
// One ShellCommand per thing the user can type. `dispatch` runs it against
// the AppState and returns something printable; failures come back as
// ErrorResponse and never end the shell.

pub mod adoption_commands;
pub mod dog_commands;
pub mod history_commands;
pub mod parser;

pub use parser::{parse, HELP};

use crate::application::dto::{DogDto, StatusDto};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;

pub type CommandResult = Result<CommandOutput, ErrorResponse>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    List,
    Add {
        name: String,
        breed: String,
        age: i32,
        photograph: String,
    },
    Remove {
        name: String,
        breed: String,
    },
    Update {
        old_name: String,
        old_breed: String,
        name: String,
        breed: String,
        age: i32,
        photograph: String,
    },
    Filter {
        breed: String,
        max_age: Option<i32>,
    },
    Search {
        text: String,
    },
    Show {
        breed: String,
        max_age: Option<i32>,
    },
    Next,
    Adopt,
    Stop,
    Adopted,
    Undo,
    Redo,
    ClearHistory,
    Status,
    Open,
    Save,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Message(String),
    Dog(DogDto),
    Dogs { title: String, dogs: Vec<DogDto> },
    Status(StatusDto),
    Quit,
}

impl std::fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandOutput::Message(message) => write!(f, "{}", message),
            CommandOutput::Dog(dog) => write!(f, "{}", dog),
            CommandOutput::Dogs { title, dogs } => {
                write!(f, "{} ({})", title, dogs.len())?;
                if dogs.is_empty() {
                    write!(f, "\n  (none)")?;
                }
                for dog in dogs {
                    write!(f, "\n  {}", dog)?;
                }
                Ok(())
            }
            CommandOutput::Status(status) => write!(f, "{}", status),
            CommandOutput::Quit => write!(f, "Bye!"),
        }
    }
}

pub fn dispatch(state: &mut AppState, command: ShellCommand) -> CommandResult {
    log::debug!("Dispatching {:?}", command);
    match command {
        ShellCommand::Help => Ok(CommandOutput::Message(HELP.to_string())),
        ShellCommand::List => dog_commands::list(state),
        ShellCommand::Add {
            name,
            breed,
            age,
            photograph,
        } => dog_commands::add(state, &name, &breed, age, &photograph),
        ShellCommand::Remove { name, breed } => dog_commands::remove(state, &name, &breed),
        ShellCommand::Update {
            old_name,
            old_breed,
            name,
            breed,
            age,
            photograph,
        } => dog_commands::update(state, &old_name, &old_breed, &name, &breed, age, &photograph),
        ShellCommand::Filter { breed, max_age } => dog_commands::filter(state, &breed, max_age),
        ShellCommand::Search { text } => dog_commands::search(state, &text),
        ShellCommand::Show { breed, max_age } => adoption_commands::show(state, &breed, max_age),
        ShellCommand::Next => adoption_commands::next(state),
        ShellCommand::Adopt => adoption_commands::adopt(state),
        ShellCommand::Stop => adoption_commands::stop(state),
        ShellCommand::Adopted => adoption_commands::adopted(state),
        ShellCommand::Open => adoption_commands::open(state),
        ShellCommand::Save => adoption_commands::save(state),
        ShellCommand::Undo => history_commands::undo(state),
        ShellCommand::Redo => history_commands::redo(state),
        ShellCommand::ClearHistory => history_commands::clear(state),
        ShellCommand::Status => history_commands::status(state),
        ShellCommand::Quit => Ok(CommandOutput::Quit),
    }
}

/// Render a list of dogs under `title`
pub(crate) fn dogs_output<'a>(
    title: impl Into<String>,
    dogs: impl IntoIterator<Item = &'a crate::domain::Dog>,
) -> CommandOutput {
    CommandOutput::Dogs {
        title: title.into(),
        dogs: dogs.into_iter().map(DogDto::from).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ShelterService;

    fn run(state: &mut AppState, line: &str) -> CommandResult {
        dispatch(state, parse(line).unwrap())
    }

    #[test]
    fn test_scripted_session() {
        let mut state = AppState::new(ShelterService::in_memory());
        run(&mut state, "add mec | poodle | 4 | m.jpg").unwrap();
        run(&mut state, "add aydo | beagle | 2 | a.jpg").unwrap();

        let output = run(&mut state, "list").unwrap();
        assert!(output.to_string().starts_with("Shelter (2)"));

        run(&mut state, "show").unwrap();
        run(&mut state, "adopt").unwrap();
        run(&mut state, "stop").unwrap();
        assert_eq!(state.service.adoption_list().len(), 1);

        run(&mut state, "undo").unwrap();
        assert_eq!(state.service.repository().len(), 2);
        assert!(state.service.adoption_list().is_empty());

        assert_eq!(run(&mut state, "quit").unwrap(), CommandOutput::Quit);
    }

    #[test]
    fn test_errors_do_not_change_state() {
        let mut state = AppState::new(ShelterService::in_memory());
        let err = run(&mut state, "undo").unwrap_err();
        assert_eq!(err.message, "There is nothing to undo!");

        let err = run(&mut state, "add rex |  | -1 | x").unwrap_err();
        assert!(err.details.unwrap().contains("; "));
        assert!(state.service.repository().is_empty());
    }

    #[test]
    fn test_empty_dog_list_rendering() {
        let output = dogs_output("Adopted", std::iter::empty());
        assert_eq!(output.to_string(), "Adopted (0)\n  (none)");
    }
}
