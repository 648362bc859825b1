// src/lib.rs
// Dog shelter - adoption manager with undo/redo
//
// Architecture:
// - Domain: the Dog record and its validation rules
// - Repositories: ordered dog lists, the collection registry, stores
// - History: reversible commands replayed against the registry
// - Services: the façade that records every mutation exactly once
// - Application Layer: console boundary (commands, DTOs, session)

// ============================================================================
// CORE
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod history;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::{ShelterConfig, StoreKind};
pub use domain::{demo_dogs, validate_dog, DefaultDogValidator, Dog, DogValidator, DomainError};
pub use error::{AppError, AppResult, PersistenceError};
pub use history::{Command, History};
pub use repositories::{
    AdoptionList, CollectionId, Collections, DogRepository, JsonShelterStore, ListKind,
    ShelterStore, Showcase, SqliteShelterStore,
};
pub use services::ShelterService;

pub use application::AppState;
pub use application::commands;
pub use application::dto;
