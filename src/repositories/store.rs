// src/repositories/store.rs
//
// Storage collaborator boundary.
//
// The core only needs "load a list" and "save a list"; how a store lays
// the dogs out on disk is the store's business.

use serde::{Deserialize, Serialize};

use crate::domain::{validate_dog, Dog};
use crate::error::{AppError, AppResult, PersistenceError, PersistenceResult};
use crate::repositories::dog_repository::DogRepository;

/// Which persisted list a store call refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Dogs currently in the shelter
    Shelter,
    /// Dogs that have been adopted
    Adopted,
}

impl ListKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Shelter => "shelter",
            ListKind::Adopted => "adopted",
        }
    }
}

impl std::fmt::Display for ListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait ShelterStore: Send + Sync {
    /// Load a list in its saved order. A list never saved loads empty.
    fn load(&self, list: ListKind) -> PersistenceResult<Vec<Dog>>;

    /// Replace the saved list with `dogs`
    fn save(&self, list: ListKind, dogs: &[Dog]) -> PersistenceResult<()>;
}

/// Load `list` from `store` and hold it to the same rules the shelter
/// enforces on input: every dog valid, no identity twice. A list that
/// breaks them was written behind the shelter's back and is reported as
/// corrupt.
pub fn load_list(store: &dyn ShelterStore, list: ListKind) -> AppResult<DogRepository> {
    let dogs = store.load(list)?;
    for dog in &dogs {
        validate_dog(dog).map_err(|e| corrupt(list, e.to_string()))?;
    }
    DogRepository::from_dogs(dogs).map_err(|e| match e {
        AppError::Duplicate { .. } => corrupt(list, e.to_string()),
        other => other,
    })
}

fn corrupt(list: ListKind, reason: String) -> AppError {
    PersistenceError::Corrupt(format!("{} list: {}", list, reason)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_returning(dogs: Vec<Dog>) -> MockShelterStore {
        let mut store = MockShelterStore::new();
        store.expect_load().returning(move |_| Ok(dogs.clone()));
        store
    }

    fn is_corrupt(result: AppResult<DogRepository>) -> bool {
        matches!(result, Err(AppError::Persistence(PersistenceError::Corrupt(_))))
    }

    #[test]
    fn test_load_list_keeps_order() {
        let store = store_returning(vec![
            Dog::new("ossi", "poodle", 3, ""),
            Dog::new("mec", "poodle", 4, ""),
        ]);
        let repo = load_list(&store, ListKind::Shelter).unwrap();
        assert_eq!(repo.get(0).unwrap().name, "ossi");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn test_load_list_rejects_invalid_dogs() {
        let store = store_returning(vec![Dog::new("", "poodle", 3, "")]);
        assert!(is_corrupt(load_list(&store, ListKind::Shelter)));

        let store = store_returning(vec![Dog::new("rex", "husky", -2, "")]);
        let err = load_list(&store, ListKind::Adopted).unwrap_err();
        assert!(err.to_string().contains("adopted list"));
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_load_list_rejects_repeated_identity() {
        let store = store_returning(vec![
            Dog::new("mec", "poodle", 4, ""),
            Dog::new("mec", "poodle", 5, ""),
        ]);
        assert!(is_corrupt(load_list(&store, ListKind::Shelter)));
    }
}
