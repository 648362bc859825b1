// src/application/state.rs
//
// Application state shared by the console commands.
//
// Wires the configured store into the service and owns the adoption
// session. Built once in main.rs.

use std::sync::Arc;

use crate::application::session::AdoptionSession;
use crate::config::{ShelterConfig, StoreKind};
use crate::db::create_connection_pool;
use crate::domain::DefaultDogValidator;
use crate::error::AppResult;
use crate::repositories::{
    load_list, AdoptionList, DogRepository, JsonShelterStore, ListKind, ShelterStore,
    SqliteShelterStore,
};
use crate::services::ShelterService;

pub struct AppState {
    pub service: ShelterService,
    pub session: AdoptionSession,
    store: Option<Arc<dyn ShelterStore>>,
}

impl AppState {
    /// State over an existing service, without persistence
    pub fn new(service: ShelterService) -> Self {
        Self {
            service,
            session: AdoptionSession::new(),
            store: None,
        }
    }

    pub fn from_config(config: &ShelterConfig) -> AppResult<Self> {
        let store = open_store(config)?;
        Self::with_store(store, config.seed_demo_dogs)
    }

    /// Load both lists from `store` (if any), seeding the demo dogs into an
    /// empty shelter when `seed` is set
    pub fn with_store(store: Option<Arc<dyn ShelterStore>>, seed: bool) -> AppResult<Self> {
        let (repository, adoption_list) = match &store {
            Some(store) => {
                let shelter = load_list(store.as_ref(), ListKind::Shelter)?;
                let mut adopted = AdoptionList::with_store(Arc::clone(store));
                adopted.open(&shelter)?;
                (shelter, adopted)
            }
            None => (DogRepository::new(), AdoptionList::new()),
        };
        log::info!(
            "Loaded {} dogs in the shelter, {} adopted",
            repository.len(),
            adoption_list.len()
        );

        let mut service =
            ShelterService::new(repository, adoption_list, Box::new(DefaultDogValidator));
        if seed && service.repository().is_empty() {
            service.seed_demo_dogs();
        }

        Ok(Self {
            service,
            session: AdoptionSession::new(),
            store,
        })
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Write the shelter and the adoption list to the store
    pub fn persist(&self) -> AppResult<()> {
        if let Some(store) = &self.store {
            store.save(ListKind::Shelter, self.service.repository().dogs())?;
            log::info!("Shelter saved ({} dogs)", self.service.repository().len());
        }
        self.service.save()
    }
}

/// The store selected by `config`, or None for a memory-only shelter
pub fn open_store(config: &ShelterConfig) -> AppResult<Option<Arc<dyn ShelterStore>>> {
    let store: Option<Arc<dyn ShelterStore>> = match config.store {
        StoreKind::Sqlite => {
            let path = config.database_path();
            log::info!("Using SQLite store at {}", path.display());
            let pool = create_connection_pool(&path)?;
            Some(Arc::new(SqliteShelterStore::new(Arc::new(pool))?))
        }
        StoreKind::Json => {
            log::info!("Using JSON store in {}", config.data_dir.display());
            Some(Arc::new(JsonShelterStore::new(config.data_dir.clone())))
        }
        StoreKind::Memory => {
            log::info!("Using in-memory shelter; nothing will be saved");
            None
        }
    };
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo_dogs;
    use crate::error::{AppError, PersistenceError};
    use crate::repositories::store::MockShelterStore;
    use tempfile::TempDir;

    fn config(dir: &TempDir, store: StoreKind, seed: bool) -> ShelterConfig {
        ShelterConfig {
            data_dir: dir.path().to_path_buf(),
            store,
            seed_demo_dogs: seed,
            log_filter: "off".to_string(),
        }
    }

    #[test]
    fn test_memory_state_seeds_demo_dogs() {
        let dir = TempDir::new().unwrap();
        let state = AppState::from_config(&config(&dir, StoreKind::Memory, true)).unwrap();
        assert!(!state.has_store());
        assert_eq!(state.service.repository().len(), demo_dogs().len());
        assert!(!state.service.history().can_undo());
    }

    #[test]
    fn test_persist_round_trips_through_json() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, StoreKind::Json, true);

        let mut state = AppState::from_config(&cfg).unwrap();
        let first = state.service.repository().get(0).unwrap().clone();
        state.service.adopt(&first).unwrap();
        state.persist().unwrap();

        let reloaded = AppState::from_config(&cfg).unwrap();
        assert_eq!(reloaded.service.repository().len(), demo_dogs().len() - 1);
        assert!(reloaded.service.adoption_list().contains(&first));
    }

    #[test]
    fn test_sqlite_store_without_seed_starts_empty() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, StoreKind::Sqlite, false);

        let mut state = AppState::from_config(&cfg).unwrap();
        assert!(state.service.repository().is_empty());
        state.service.add("rex", "husky", 2, "").unwrap();
        state.persist().unwrap();

        let reloaded = AppState::from_config(&cfg).unwrap();
        assert_eq!(reloaded.service.repository().len(), 1);
        assert!(cfg.database_path().exists());
    }

    #[test]
    fn test_dog_both_in_shelter_and_adopted_is_rejected() {
        let dir = TempDir::new().unwrap();
        let store = JsonShelterStore::new(dir.path());
        let mec = crate::domain::Dog::new("mec", "poodle", 4, "");
        store.save(ListKind::Shelter, &[mec.clone()]).unwrap();
        store.save(ListKind::Adopted, &[mec]).unwrap();

        let result = AppState::with_store(Some(Arc::new(store)), false);
        assert!(matches!(
            result,
            Err(AppError::Persistence(PersistenceError::Corrupt(_)))
        ));
    }

    #[test]
    fn test_hand_edited_invalid_dog_is_rejected() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("shelter.json"),
            r#"[{"name": "", "breed": "poodle", "age": -1, "photograph": ""}]"#,
        )
        .unwrap();

        let cfg = config(&dir, StoreKind::Json, true);
        assert!(matches!(
            AppState::from_config(&cfg),
            Err(AppError::Persistence(PersistenceError::Corrupt(_)))
        ));
    }

    #[test]
    fn test_load_failure_surfaces() {
        let mut store = MockShelterStore::new();
        store
            .expect_load()
            .returning(|_| Err(PersistenceError::Corrupt("truncated".to_string())));

        let result = AppState::with_store(Some(Arc::new(store)), true);
        assert!(matches!(
            result,
            Err(AppError::Persistence(PersistenceError::Corrupt(_)))
        ));
    }
}
