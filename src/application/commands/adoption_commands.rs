// src/application/commands/adoption_commands.rs
//
// Showing dogs for adoption and the adoption list.

use super::{dogs_output, CommandOutput, CommandResult};
use crate::application::dto::DogDto;
use crate::application::error_handling::ErrorResponse;
use crate::application::session::AdoptionOutcome;
use crate::application::state::AppState;

/// Start showing the dogs of `breed` younger than `max_age` (all dogs when
/// both are left open)
pub fn show(state: &mut AppState, breed: &str, max_age: Option<i32>) -> CommandResult {
    let showcase = state.service.show_matching(breed, max_age);

    if !state.session.start(showcase) {
        state.service.stop_showing();
        return Ok(CommandOutput::Message(
            "There are no dogs to show".to_string(),
        ));
    }
    current(state)
}

pub fn next(state: &mut AppState) -> CommandResult {
    let dog = state
        .session
        .advance(&state.service)
        .ok_or_else(not_showing)?;
    Ok(CommandOutput::Dog(DogDto::from(dog)))
}

pub fn adopt(state: &mut AppState) -> CommandResult {
    let adopted = state
        .session
        .current(&state.service)
        .map(DogDto::from)
        .ok_or_else(not_showing)?;

    let message = match state.session.adopt_current(&mut state.service)? {
        AdoptionOutcome::Continue(next) => format!(
            "Adopted {} ({}). Now showing:\n{}",
            adopted.name,
            adopted.breed,
            DogDto::from(&next)
        ),
        AdoptionOutcome::Exhausted => format!(
            "Adopted {} ({}). There are no more dogs to show.",
            adopted.name, adopted.breed
        ),
    };
    Ok(CommandOutput::Message(message))
}

pub fn stop(state: &mut AppState) -> CommandResult {
    if !state.session.is_active() {
        return Err(not_showing());
    }
    state.session.stop(&mut state.service);
    Ok(CommandOutput::Message("Stopped showing dogs".to_string()))
}

pub fn adopted(state: &mut AppState) -> CommandResult {
    Ok(dogs_output(
        "Adopted",
        state.service.adoption_list().repository(),
    ))
}

/// Reload the adoption list from the store. The history is cleared.
pub fn open(state: &mut AppState) -> CommandResult {
    if !state.has_store() {
        return Err(ErrorResponse::validation(
            "The shelter is running in memory; there is nothing to open",
        ));
    }
    state.service.open_adoption_list()?;
    Ok(CommandOutput::Message(format!(
        "Adoption list loaded ({} dogs). History cleared.",
        state.service.adoption_list().len()
    )))
}

pub fn save(state: &mut AppState) -> CommandResult {
    if !state.has_store() {
        return Err(ErrorResponse::validation(
            "The shelter is running in memory; there is nothing to save to",
        ));
    }
    state.persist()?;
    Ok(CommandOutput::Message("Saved".to_string()))
}

pub(crate) fn current(state: &AppState) -> CommandResult {
    let dog = state
        .session
        .current(&state.service)
        .ok_or_else(not_showing)?;
    Ok(CommandOutput::Dog(DogDto::from(dog)))
}

fn not_showing() -> ErrorResponse {
    ErrorResponse::validation("No dogs are being shown. Use 'show' first.")
}
