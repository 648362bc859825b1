// src/application/commands/dog_commands.rs
//
// Shelter administration: list, add, remove, update, filter, search.
//
// Add/remove/update are refused while dogs are being shown for adoption:
// the showcase is a copy of the shelter and would drift from it.

use super::{dogs_output, CommandOutput, CommandResult};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;

pub fn list(state: &mut AppState) -> CommandResult {
    Ok(dogs_output("Shelter", state.service.repository()))
}

pub fn add(
    state: &mut AppState,
    name: &str,
    breed: &str,
    age: i32,
    photograph: &str,
) -> CommandResult {
    ensure_not_showing(state)?;
    state.service.add(name, breed, age, photograph)?;
    Ok(CommandOutput::Message(format!("Added {} ({})", name, breed)))
}

pub fn remove(state: &mut AppState, name: &str, breed: &str) -> CommandResult {
    ensure_not_showing(state)?;
    state.service.remove(name, breed)?;
    Ok(CommandOutput::Message(format!("Removed {} ({})", name, breed)))
}

pub fn update(
    state: &mut AppState,
    old_name: &str,
    old_breed: &str,
    name: &str,
    breed: &str,
    age: i32,
    photograph: &str,
) -> CommandResult {
    ensure_not_showing(state)?;
    state
        .service
        .update(old_name, old_breed, name, breed, age, photograph)?;
    Ok(CommandOutput::Message(format!(
        "Updated {} ({}) -> {} ({})",
        old_name, old_breed, name, breed
    )))
}

pub fn filter(state: &mut AppState, breed: &str, max_age: Option<i32>) -> CommandResult {
    let found = state.service.filter_matching(breed, max_age);
    let title = match breed {
        "" => "Dogs".to_string(),
        breed => format!("Dogs of breed '{}'", breed),
    };
    Ok(dogs_output(title, &found))
}

pub fn search(state: &mut AppState, text: &str) -> CommandResult {
    let found = state.service.filter_by_text(text);
    Ok(dogs_output(format!("Dogs matching '{}'", text), &found))
}

pub(crate) fn ensure_not_showing(state: &AppState) -> Result<(), ErrorResponse> {
    if state.session.is_active() {
        return Err(ErrorResponse::validation(
            "Stop showing dogs for adoption before changing the shelter",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::services::ShelterService;

    fn state() -> AppState {
        let mut service = ShelterService::in_memory();
        service.add("mec", "poodle", 4, "").unwrap();
        service.add("aydo", "beagle", 2, "").unwrap();
        service.add("ossi", "poodle", 3, "").unwrap();
        service.clear_history();
        AppState::new(service)
    }

    fn names(output: CommandOutput) -> Vec<String> {
        match output {
            CommandOutput::Dogs { dogs, .. } => dogs.into_iter().map(|d| d.name).collect(),
            other => panic!("expected dogs, got {:?}", other),
        }
    }

    #[test]
    fn test_add_remove_update() {
        let mut state = state();
        add(&mut state, "rex", "husky", 1, "r.jpg").unwrap();
        update(&mut state, "rex", "husky", "rex", "husky", 2, "r2.jpg").unwrap();
        remove(&mut state, "mec", "poodle").unwrap();

        assert_eq!(
            names(list(&mut state).unwrap()),
            vec!["aydo", "ossi", "rex"]
        );
        assert_eq!(state.service.history().undo_depth(), 3);
    }

    #[test]
    fn test_remove_unknown_is_not_found() {
        let mut state = state();
        let err = remove(&mut state, "rex", "husky").unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[test]
    fn test_filter_and_search() {
        let mut state = state();
        assert_eq!(
            names(filter(&mut state, "poodle", Some(4)).unwrap()),
            vec!["ossi"]
        );
        assert_eq!(names(filter(&mut state, "", None).unwrap()).len(), 3);
        assert_eq!(names(search(&mut state, "ag").unwrap()), vec!["aydo"]);
    }

    #[test]
    fn test_filter_without_age_keeps_oldest_possible_dog() {
        let mut state = state();
        add(&mut state, "old", "husky", i32::MAX, "").unwrap();

        let output = filter(&mut state, "", None).unwrap();
        assert!(output.to_string().starts_with("Dogs (4)"));
        assert_eq!(names(filter(&mut state, "husky", None).unwrap()), vec!["old"]);
    }

    #[test]
    fn test_mutations_refused_while_showing() {
        let mut state = state();
        let showcase = state.service.show_all();
        assert!(state.session.start(showcase));

        let err = add(&mut state, "rex", "husky", 1, "").unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);
        assert!(remove(&mut state, "mec", "poodle").is_err());
        assert_eq!(state.service.repository().len(), 3);
    }
}
