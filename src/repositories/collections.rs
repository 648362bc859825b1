// src/repositories/collections.rs
//
// Owner-held registry of every dog list the history can touch.
//
// History commands never hold references into these lists. They carry a
// CollectionId (or a showcase generation) and are handed the registry
// when they are replayed.

use serde::{Deserialize, Serialize};

use crate::repositories::adoption_list::AdoptionList;
use crate::repositories::dog_repository::DogRepository;

/// Handle to one of the authoritative lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionId {
    Repository,
    AdoptionList,
}

impl std::fmt::Display for CollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionId::Repository => write!(f, "repository"),
            CollectionId::AdoptionList => write!(f, "adoption list"),
        }
    }
}

/// The transient view of dogs currently being shown for adoption.
///
/// A showcase is a filtered copy of the repository. Every new showcase
/// gets a fresh generation so that history entries captured against an
/// older view can tell it is gone.
#[derive(Debug, Clone)]
pub struct Showcase {
    generation: u64,
    dogs: DogRepository,
}

impl Showcase {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dogs(&self) -> &DogRepository {
        &self.dogs
    }

    pub(crate) fn dogs_mut(&mut self) -> &mut DogRepository {
        &mut self.dogs
    }
}

#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub repository: DogRepository,
    pub adoption_list: AdoptionList,
    showcase: Option<Showcase>,
    next_generation: u64,
}

impl Collections {
    pub fn new(repository: DogRepository, adoption_list: AdoptionList) -> Self {
        Self {
            repository,
            adoption_list,
            showcase: None,
            next_generation: 1,
        }
    }

    pub fn get(&self, id: CollectionId) -> &DogRepository {
        match id {
            CollectionId::Repository => &self.repository,
            CollectionId::AdoptionList => self.adoption_list.repository(),
        }
    }

    pub fn get_mut(&mut self, id: CollectionId) -> &mut DogRepository {
        match id {
            CollectionId::Repository => &mut self.repository,
            CollectionId::AdoptionList => self.adoption_list.repository_mut(),
        }
    }

    /// Replace the current showcase with a new generation showing `dogs`
    pub fn install_showcase(&mut self, dogs: DogRepository) -> &Showcase {
        let generation = self.next_generation.max(1);
        self.next_generation = generation + 1;
        self.showcase.insert(Showcase { generation, dogs })
    }

    pub fn clear_showcase(&mut self) {
        self.showcase = None;
    }

    pub fn showcase(&self) -> Option<&Showcase> {
        self.showcase.as_ref()
    }

    /// The showcase, but only if it is still the one with `generation`
    pub fn showcase_if_live(&self, generation: u64) -> Option<&Showcase> {
        self.showcase
            .as_ref()
            .filter(|s| s.generation == generation)
    }

    pub(crate) fn showcase_if_live_mut(&mut self, generation: u64) -> Option<&mut Showcase> {
        self.showcase
            .as_mut()
            .filter(|s| s.generation == generation)
    }
}
