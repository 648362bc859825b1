// src/domain/mod.rs
//
// Domain Root - the single source of truth for the domain API.
// All other modules import from `crate::domain::*`

pub mod dog;
pub mod seed;

pub use dog::{validate_dog, DefaultDogValidator, Dog, DogValidator};
pub use seed::demo_dogs;

use thiserror::Error;

/// Domain-level errors
/// These represent violations of the rules a dog must satisfy
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid dog: {}", .0.join("; "))]
    InvalidDog(Vec<String>),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
