// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Lists enforce identity uniqueness and positions, nothing else
// - No validation of field values (that is the service's job)
// - No history recording
// - Stores are external collaborators behind the ShelterStore trait

pub mod adoption_list;
pub mod collections;
pub mod dog_repository;
pub mod json_store;
pub mod sqlite_store;
pub mod store;

pub use adoption_list::AdoptionList;
pub use collections::{CollectionId, Collections, Showcase};
pub use dog_repository::DogRepository;
pub use json_store::JsonShelterStore;
pub use sqlite_store::SqliteShelterStore;
pub use store::{load_list, ListKind, ShelterStore};
