// src/repositories/adoption_list.rs
//
// Dogs that have left the shelter.
//
// Behaves as a DogRepository and adds an externally triggered load/flush
// boundary through an optional store.

use std::sync::Arc;

use crate::domain::Dog;
use crate::error::{AppResult, PersistenceError};
use crate::repositories::dog_repository::DogRepository;
use crate::repositories::store::{load_list, ListKind, ShelterStore};

#[derive(Clone, Default)]
pub struct AdoptionList {
    dogs: DogRepository,
    store: Option<Arc<dyn ShelterStore>>,
}

impl AdoptionList {
    /// An adoption list that lives only in memory
    pub fn new() -> Self {
        Self::default()
    }

    /// An adoption list backed by `store`. Nothing is loaded until `open`.
    pub fn with_store(store: Arc<dyn ShelterStore>) -> Self {
        Self {
            dogs: DogRepository::new(),
            store: Some(store),
        }
    }

    /// Reload the list from its store, replacing the in-memory contents.
    ///
    /// A dog still in `shelter` cannot also be adopted, so a stored list
    /// overlapping it is rejected. On failure the current contents are kept.
    pub fn open(&mut self, shelter: &DogRepository) -> AppResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let loaded = load_list(store.as_ref(), ListKind::Adopted)?;
        if let Some(dog) = loaded.iter().find(|d| shelter.contains(d)) {
            return Err(PersistenceError::Corrupt(format!(
                "{} ({}) is both in the shelter and adopted",
                dog.name, dog.breed
            ))
            .into());
        }
        self.dogs = loaded;
        log::info!("Adoption list loaded ({} dogs)", self.dogs.len());
        Ok(())
    }

    /// Flush the list to its store
    pub fn save(&self) -> AppResult<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        store.save(ListKind::Adopted, self.dogs.dogs())?;
        log::info!("Adoption list saved ({} dogs)", self.dogs.len());
        Ok(())
    }

    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    pub fn add(&mut self, dog: Dog) -> AppResult<()> {
        self.dogs.add(dog)
    }

    pub fn insert_at(&mut self, index: usize, dog: Dog) -> AppResult<()> {
        self.dogs.insert_at(index, dog)
    }

    pub fn remove(&mut self, dog: &Dog) -> AppResult<usize> {
        self.dogs.remove(dog)
    }

    pub fn index_of(&self, dog: &Dog) -> Option<usize> {
        self.dogs.index_of(dog)
    }

    pub fn contains(&self, dog: &Dog) -> bool {
        self.dogs.contains(dog)
    }

    pub fn repository(&self) -> &DogRepository {
        &self.dogs
    }

    pub(crate) fn repository_mut(&mut self) -> &mut DogRepository {
        &mut self.dogs
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }
}

impl std::fmt::Debug for AdoptionList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdoptionList")
            .field("dogs", &self.dogs)
            .field("has_store", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, PersistenceError};
    use crate::repositories::store::MockShelterStore;

    #[test]
    fn test_open_without_store_is_noop() {
        let mut list = AdoptionList::new();
        list.add(Dog::new("mec", "poodle", 4, "")).unwrap();
        list.open(&DogRepository::new()).unwrap();
        list.save().unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_open_replaces_contents() {
        let mut store = MockShelterStore::new();
        store
            .expect_load()
            .withf(|list| *list == ListKind::Adopted)
            .returning(|_| Ok(vec![Dog::new("aydo", "beagle", 2, "")]));

        let mut list = AdoptionList::with_store(Arc::new(store));
        list.add(Dog::new("mec", "poodle", 4, "")).unwrap();
        list.open(&DogRepository::new()).unwrap();

        assert_eq!(list.len(), 1);
        assert!(list.contains(&Dog::new("aydo", "beagle", 0, "")));
    }

    #[test]
    fn test_store_failure_passes_through_and_keeps_contents() {
        let mut store = MockShelterStore::new();
        store
            .expect_load()
            .returning(|_| Err(PersistenceError::Corrupt("bad header".to_string())));

        let mut list = AdoptionList::with_store(Arc::new(store));
        list.add(Dog::new("mec", "poodle", 4, "")).unwrap();

        let err = list.open(&DogRepository::new()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Persistence(PersistenceError::Corrupt(_))
        ));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_open_rejects_dog_still_in_shelter() {
        let mut store = MockShelterStore::new();
        store
            .expect_load()
            .returning(|_| Ok(vec![Dog::new("mec", "poodle", 4, "")]));
        let shelter = DogRepository::from_dogs(vec![Dog::new("mec", "poodle", 4, "")]).unwrap();

        let mut list = AdoptionList::with_store(Arc::new(store));
        list.add(Dog::new("aydo", "beagle", 2, "")).unwrap();

        let err = list.open(&shelter).unwrap_err();
        assert!(matches!(
            err,
            AppError::Persistence(PersistenceError::Corrupt(_))
        ));
        assert!(list.contains(&Dog::new("aydo", "beagle", 2, "")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_save_writes_adopted_list() {
        let mut store = MockShelterStore::new();
        store
            .expect_save()
            .withf(|list, dogs| *list == ListKind::Adopted && dogs.len() == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        let mut list = AdoptionList::with_store(Arc::new(store));
        list.add(Dog::new("mec", "poodle", 4, "")).unwrap();
        list.add(Dog::new("aydo", "beagle", 2, "")).unwrap();
        list.save().unwrap();
    }

    #[test]
    fn test_duplicate_adoption_rejected() {
        let mut list = AdoptionList::new();
        list.add(Dog::new("mec", "poodle", 4, "")).unwrap();
        assert!(matches!(
            list.add(Dog::new("mec", "poodle", 5, "")),
            Err(AppError::Duplicate { .. })
        ));
    }
}
