// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain types only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::Dog;
use crate::history::Command;
use crate::services::ShelterService;

// ============================================================================
// DOG DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogDto {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub photograph: String,
}

impl From<&Dog> for DogDto {
    fn from(dog: &Dog) -> Self {
        Self {
            name: dog.name.clone(),
            breed: dog.breed.clone(),
            age: dog.age,
            photograph: dog.photograph.clone(),
        }
    }
}

impl std::fmt::Display for DogDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<12} {:<18} {:>3}  {}", self.name, self.breed, self.age, self.photograph)
    }
}

// ============================================================================
// HISTORY DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDto {
    pub kind: String,
    pub dog: DogDto,
    pub summary: String,
}

impl From<&Command> for CommandDto {
    fn from(command: &Command) -> Self {
        Self {
            kind: command.kind().to_string(),
            dog: DogDto::from(command.dog()),
            summary: command.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusDto {
    pub shelter_count: usize,
    pub adopted_count: usize,
    pub undo_depth: usize,
    pub redo_depth: usize,
    pub next_undo: Option<String>,
    pub next_redo: Option<String>,
    pub showing: Option<usize>,
}

impl From<&ShelterService> for StatusDto {
    fn from(service: &ShelterService) -> Self {
        let history = service.history();
        Self {
            shelter_count: service.repository().len(),
            adopted_count: service.adoption_list().len(),
            undo_depth: history.undo_depth(),
            redo_depth: history.redo_depth(),
            next_undo: history.peek_undo().map(|c| c.to_string()),
            next_redo: history.peek_redo().map(|c| c.to_string()),
            showing: service.showcase().map(|s| s.dogs().len()),
        }
    }
}

impl std::fmt::Display for StatusDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "In shelter: {}", self.shelter_count)?;
        writeln!(f, "Adopted:    {}", self.adopted_count)?;
        if let Some(showing) = self.showing {
            writeln!(f, "Showing:    {}", showing)?;
        }
        writeln!(
            f,
            "Undo: {} ({})",
            self.undo_depth,
            self.next_undo.as_deref().unwrap_or("-")
        )?;
        write!(
            f,
            "Redo: {} ({})",
            self.redo_depth,
            self.next_redo.as_deref().unwrap_or("-")
        )
    }
}
