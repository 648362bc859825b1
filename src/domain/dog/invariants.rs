use super::entity::Dog;
use crate::domain::{DomainError, DomainResult};

/// Pluggable validation applied by the service before any mutation
pub trait DogValidator: Send + Sync {
    fn validate(&self, dog: &Dog) -> DomainResult<()>;
}

/// Validator enforcing the field rules every dog must satisfy
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDogValidator;

impl DogValidator for DefaultDogValidator {
    fn validate(&self, dog: &Dog) -> DomainResult<()> {
        validate_dog(dog)
    }
}

/// Validates all Dog invariants, reporting every broken rule at once
pub fn validate_dog(dog: &Dog) -> DomainResult<()> {
    let mut problems = Vec::new();

    if dog.name.trim().is_empty() {
        problems.push("Name cannot be empty".to_string());
    }
    if dog.breed.trim().is_empty() {
        problems.push("Breed cannot be empty".to_string());
    }
    if dog.age < 0 {
        problems.push(format!("Age cannot be negative (got {})", dog.age));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvalidDog(problems))
    }
}
