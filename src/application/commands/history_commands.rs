// src/application/commands/history_commands.rs
//
// Undo, redo and history inspection.

use super::{adoption_commands, CommandOutput, CommandResult};
use crate::application::dto::{CommandDto, StatusDto};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::history::Command;

pub fn undo(state: &mut AppState) -> CommandResult {
    if state.session.is_active() {
        ensure_adoption(state.service.history().peek_undo())?;
    }
    let command = state.service.undo()?;
    state.session.after_undo(&command, &state.service);
    replayed(state, "Undid", &command)
}

pub fn redo(state: &mut AppState) -> CommandResult {
    if state.session.is_active() {
        ensure_adoption(state.service.history().peek_redo())?;
    }
    let command = state.service.redo()?;
    state.session.after_redo(&command, &mut state.service);
    replayed(state, "Redid", &command)
}

pub fn clear(state: &mut AppState) -> CommandResult {
    state.service.clear_history();
    Ok(CommandOutput::Message("History cleared".to_string()))
}

pub fn status(state: &mut AppState) -> CommandResult {
    Ok(CommandOutput::Status(StatusDto::from(&state.service)))
}

/// While dogs are being shown only adoptions may be replayed; anything else
/// would change the shelter under the showcase.
fn ensure_adoption(next: Option<&Command>) -> Result<(), ErrorResponse> {
    match next {
        Some(command) if !matches!(command, Command::Adopt { .. }) => {
            Err(ErrorResponse::validation(format!(
                "Stop showing dogs for adoption before replaying '{}'",
                command
            )))
        }
        _ => Ok(()),
    }
}

fn replayed(state: &AppState, verb: &str, command: &Command) -> CommandResult {
    let dto = CommandDto::from(command);
    let mut message = format!("{} {}", verb, dto.summary);
    if state.session.is_active() {
        if let Ok(CommandOutput::Dog(dog)) = adoption_commands::current(state) {
            message.push_str(&format!("\nNow showing:\n{}", dog));
        }
    }
    Ok(CommandOutput::Message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::adoption_commands::{adopt, show};
    use crate::application::error_handling::ErrorType;
    use crate::services::ShelterService;

    fn state() -> AppState {
        let mut service = ShelterService::in_memory();
        service.add("mec", "poodle", 4, "").unwrap();
        service.add("aydo", "beagle", 2, "").unwrap();
        AppState::new(service)
    }

    #[test]
    fn test_undo_redo_messages() {
        let mut state = state();
        let output = undo(&mut state).unwrap();
        assert_eq!(output.to_string(), "Undid add aydo (beagle)");
        let output = redo(&mut state).unwrap();
        assert_eq!(output.to_string(), "Redid add aydo (beagle)");
    }

    #[test]
    fn test_empty_history_errors() {
        let mut state = state();
        clear(&mut state).unwrap();
        let err = undo(&mut state).unwrap_err();
        assert_eq!(err.error_type, ErrorType::History);
        assert_eq!(redo(&mut state).unwrap_err().message, "There is nothing to redo!");
    }

    #[test]
    fn test_undo_adoption_during_session_keeps_cursor() {
        let mut state = state();
        show(&mut state, "", None).unwrap();
        adopt(&mut state).unwrap();

        let output = undo(&mut state).unwrap().to_string();
        assert!(output.starts_with("Undid adopt mec (poodle)"));
        assert!(output.contains("aydo"));
        assert_eq!(state.session.cursor(), Some(1));
        assert_eq!(state.service.repository().len(), 2);
    }

    #[test]
    fn test_only_adoptions_replay_during_session() {
        let mut state = state();
        show(&mut state, "", None).unwrap();

        let err = undo(&mut state).unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);
        assert_eq!(state.service.repository().len(), 2);
        assert_eq!(state.service.history().undo_depth(), 2);
    }

    #[test]
    fn test_status() {
        let mut state = state();
        match status(&mut state).unwrap() {
            CommandOutput::Status(status) => {
                assert_eq!(status.shelter_count, 2);
                assert_eq!(status.undo_depth, 2);
            }
            other => panic!("expected status, got {:?}", other),
        }
    }
}
