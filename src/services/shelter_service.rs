// src/services/shelter_service.rs
//
// Shelter Service - the façade the presentation layer talks to.
//
// Owns every dog list and the single undo/redo history. Each successful
// mutation records exactly one command; a failed call leaves lists and
// history untouched.

use crate::domain::{demo_dogs, DefaultDogValidator, Dog, DogValidator};
use crate::error::{AppError, AppResult};
use crate::history::{Command, History, ShowcasePosition};
use crate::repositories::{AdoptionList, CollectionId, Collections, DogRepository, Showcase};

pub struct ShelterService {
    collections: Collections,
    history: History,
    validator: Box<dyn DogValidator>,
}

impl ShelterService {
    pub fn new(
        repository: DogRepository,
        adoption_list: AdoptionList,
        validator: Box<dyn DogValidator>,
    ) -> Self {
        Self {
            collections: Collections::new(repository, adoption_list),
            history: History::new(),
            validator,
        }
    }

    /// Empty in-memory shelter with the default validator
    pub fn in_memory() -> Self {
        Self::new(
            DogRepository::new(),
            AdoptionList::new(),
            Box::new(DefaultDogValidator),
        )
    }

    /// Add the demo dogs that are not already present. Not recorded in
    /// the history: seeding is setup, not an undoable user action.
    pub fn seed_demo_dogs(&mut self) -> usize {
        let mut added = 0;
        for dog in demo_dogs() {
            if !self.collections.repository.contains(&dog)
                && !self.collections.adoption_list.contains(&dog)
                && self.collections.repository.add(dog).is_ok()
            {
                added += 1;
            }
        }
        log::info!("Seeded {} demo dogs", added);
        added
    }

    // ------------------------------------------------------------------
    // Mutations (recorded)
    // ------------------------------------------------------------------

    pub fn add(&mut self, name: &str, breed: &str, age: i32, photograph: &str) -> AppResult<()> {
        let dog = Dog::new(name, breed, age, photograph);
        self.validator.validate(&dog)?;

        let index = self.collections.repository.len();
        self.collections.repository.add(dog.clone())?;

        log::info!("Added {}", dog);
        self.history.record(Command::Add {
            dog,
            target: CollectionId::Repository,
            index,
        });
        Ok(())
    }

    pub fn remove(&mut self, name: &str, breed: &str) -> AppResult<()> {
        let dog = self
            .collections
            .repository
            .find_by_name_and_breed(name, breed)?
            .clone();
        let index = self.collections.repository.remove(&dog)?;

        log::info!("Removed {} from position {}", dog, index);
        self.history.record(Command::Remove {
            dog,
            target: CollectionId::Repository,
            index,
        });
        Ok(())
    }

    pub fn update(
        &mut self,
        old_name: &str,
        old_breed: &str,
        name: &str,
        breed: &str,
        age: i32,
        photograph: &str,
    ) -> AppResult<()> {
        let new = Dog::new(name, breed, age, photograph);
        self.validator.validate(&new)?;

        let old = self
            .collections
            .repository
            .find_by_name_and_breed(old_name, old_breed)?
            .clone();
        self.collections.repository.update(&old, new.clone())?;

        log::info!("Updated {} -> {}", old, new);
        self.history.record(Command::Update {
            old,
            new,
            target: CollectionId::Repository,
        });
        Ok(())
    }

    /// Move a dog from the shelter into the adoption list.
    ///
    /// If the dog is part of the live showcase it leaves the showcase too,
    /// and the command remembers where it stood there.
    pub fn adopt(&mut self, dog: &Dog) -> AppResult<()> {
        let repository_index = self
            .collections
            .repository
            .index_of(dog)
            .ok_or_else(|| AppError::not_found(&dog.name, &dog.breed))?;
        if self.collections.adoption_list.contains(dog) {
            return Err(AppError::duplicate(&dog.name, &dog.breed));
        }

        let showcase = self.collections.showcase().and_then(|s| {
            s.dogs().index_of(dog).map(|index| ShowcasePosition {
                generation: s.generation(),
                index,
            })
        });
        let adoption_index = self.collections.adoption_list.len();

        let adopted = self.collections.repository.dogs()[repository_index].clone();
        self.collections.repository.remove(&adopted)?;
        if let Some(pos) = showcase {
            if let Some(view) = self.collections.showcase_if_live_mut(pos.generation) {
                view.dogs_mut().remove(&adopted)?;
            }
        }
        self.collections.adoption_list.add(adopted.clone())?;

        log::info!("Adopted {}", adopted);
        self.history.record(Command::Adopt {
            dog: adopted,
            repository_index,
            showcase,
            adoption_index,
        });
        Ok(())
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    /// Revert the last recorded mutation and hand back the command that
    /// was reverted
    pub fn undo(&mut self) -> AppResult<Command> {
        let command = self.history.undo(&mut self.collections)?;
        log::info!("Undid {}", command);
        Ok(command)
    }

    pub fn redo(&mut self) -> AppResult<Command> {
        let command = self.history.redo(&mut self.collections)?;
        log::info!("Redid {}", command);
        Ok(command)
    }

    /// Forget all history. Callers use this after changing the lists in a
    /// way the history does not track.
    pub fn clear_history(&mut self) {
        self.history.clear();
        log::info!("History cleared");
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    // ------------------------------------------------------------------
    // Queries (never recorded)
    // ------------------------------------------------------------------

    /// Dogs of `breed` (any breed when empty) younger than `max_age`
    pub fn filter_by_breed_and_age(&self, breed: &str, max_age: i32) -> DogRepository {
        self.filter_matching(breed, Some(max_age))
    }

    /// Like `filter_by_breed_and_age`, with no age bound when `max_age` is None
    pub fn filter_matching(&self, breed: &str, max_age: Option<i32>) -> DogRepository {
        self.collections.repository.filter(|d| {
            (breed.is_empty() || d.breed == breed) && max_age.map_or(true, |max| d.age < max)
        })
    }

    /// Dogs whose name or breed contains `text`
    pub fn filter_by_text(&self, text: &str) -> DogRepository {
        self.collections
            .repository
            .filter(|d| d.name.contains(text) || d.breed.contains(text))
    }

    pub fn repository(&self) -> &DogRepository {
        &self.collections.repository
    }

    pub fn adoption_list(&self) -> &AdoptionList {
        &self.collections.adoption_list
    }

    // ------------------------------------------------------------------
    // Showcase
    // ------------------------------------------------------------------

    /// Start showing every dog in the shelter
    pub fn show_all(&mut self) -> &Showcase {
        let dogs = self.collections.repository.clone();
        self.install_showcase(dogs)
    }

    /// Start showing the dogs matching `filter_by_breed_and_age`
    pub fn show_filtered(&mut self, breed: &str, max_age: i32) -> &Showcase {
        self.show_matching(breed, Some(max_age))
    }

    /// Start showing the dogs matching `filter_matching`
    pub fn show_matching(&mut self, breed: &str, max_age: Option<i32>) -> &Showcase {
        let dogs = self.filter_matching(breed, max_age);
        self.install_showcase(dogs)
    }

    pub fn stop_showing(&mut self) {
        self.collections.clear_showcase();
    }

    pub fn showcase(&self) -> Option<&Showcase> {
        self.collections.showcase()
    }

    fn install_showcase(&mut self, dogs: DogRepository) -> &Showcase {
        let showcase = self.collections.install_showcase(dogs);
        log::debug!(
            "Showcase {} installed with {} dogs",
            showcase.generation(),
            showcase.dogs().len()
        );
        showcase
    }

    // ------------------------------------------------------------------
    // Persistence boundary
    // ------------------------------------------------------------------

    /// Reload the adoption list from its store. Positions captured by the
    /// history no longer hold afterwards, so the history is cleared.
    ///
    /// A stored list holding a dog that is back in the shelter is rejected;
    /// lists and history are then left as they were.
    pub fn open_adoption_list(&mut self) -> AppResult<()> {
        self.collections
            .adoption_list
            .open(&self.collections.repository)?;
        self.clear_history();
        Ok(())
    }

    /// Flush the adoption list to its store
    pub fn save(&self) -> AppResult<()> {
        self.collections.adoption_list.save()
    }
}

impl Default for ShelterService {
    fn default() -> Self {
        Self::in_memory()
    }
}
