// src/history/command.rs
//
// Reversible mutations.
//
// A command is built only after its forward effect has succeeded, so it
// always describes a state change that really happened. Replaying checks
// every precondition before touching any list: a command either applies
// completely or leaves the collections exactly as they were.

use serde::{Deserialize, Serialize};

use crate::domain::Dog;
use crate::error::{AppError, AppResult};
use crate::repositories::{CollectionId, Collections, DogRepository};

/// Where an adopted dog sat in the showcase that was live at adoption time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowcasePosition {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Command {
    /// `dog` was inserted into `target` at `index`
    Add {
        dog: Dog,
        target: CollectionId,
        index: usize,
    },

    /// `dog` was taken out of `target` from `index`
    Remove {
        dog: Dog,
        target: CollectionId,
        index: usize,
    },

    /// `old` was replaced by `new` in `target`. Located by identity on replay.
    Update {
        old: Dog,
        new: Dog,
        target: CollectionId,
    },

    /// `dog` moved from the repository (and the showcase, if it was shown
    /// there) into the adoption list
    Adopt {
        dog: Dog,
        repository_index: usize,
        showcase: Option<ShowcasePosition>,
        adoption_index: usize,
    },
}

impl Command {
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Remove { .. } => "remove",
            Command::Update { .. } => "update",
            Command::Adopt { .. } => "adopt",
        }
    }

    /// The dog this command is about (the new version for updates)
    pub fn dog(&self) -> &Dog {
        match self {
            Command::Add { dog, .. } | Command::Remove { dog, .. } | Command::Adopt { dog, .. } => {
                dog
            }
            Command::Update { new, .. } => new,
        }
    }

    /// Showcase position of an adoption, for callers tracking a cursor
    pub fn showcase_position(&self) -> Option<ShowcasePosition> {
        match self {
            Command::Adopt { showcase, .. } => *showcase,
            _ => None,
        }
    }

    /// Restore the state from before the command
    pub fn undo(&self, collections: &mut Collections) -> AppResult<()> {
        match self {
            Command::Add { dog, target, index } => {
                take_out(collections.get_mut(*target), dog, *index)
            }
            Command::Remove { dog, target, index } => {
                put_back(collections.get_mut(*target), dog, *index)
            }
            Command::Update { old, new, target } => {
                collections.get_mut(*target).update(new, old.clone())?;
                Ok(())
            }
            Command::Adopt {
                dog,
                repository_index,
                showcase,
                adoption_index,
            } => undo_adopt(collections, dog, *repository_index, *showcase, *adoption_index),
        }
    }

    /// Apply the command again after it was undone
    pub fn redo(&self, collections: &mut Collections) -> AppResult<()> {
        match self {
            Command::Add { dog, target, index } => {
                put_back(collections.get_mut(*target), dog, *index)
            }
            Command::Remove { dog, target, index } => {
                take_out(collections.get_mut(*target), dog, *index)
            }
            Command::Update { old, new, target } => {
                collections.get_mut(*target).update(old, new.clone())?;
                Ok(())
            }
            Command::Adopt {
                dog,
                repository_index,
                showcase,
                adoption_index,
            } => redo_adopt(collections, dog, *repository_index, *showcase, *adoption_index),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Update { old, new, .. } => {
                write!(f, "update {} ({}) -> {} ({})", old.name, old.breed, new.name, new.breed)
            }
            other => write!(f, "{} {} ({})", other.kind(), other.dog().name, other.dog().breed),
        }
    }
}

/// The dog must still be at `index`; anything else means the list was
/// changed behind the history's back.
fn expect_at(list: &DogRepository, dog: &Dog, index: usize) -> AppResult<()> {
    match list.get(index) {
        Some(found) if found.same_identity(dog) => Ok(()),
        _ => Err(AppError::HistoryConflict(format!(
            "expected {} ({}) at position {}",
            dog.name, dog.breed, index
        ))),
    }
}

fn expect_insertable(list: &DogRepository, dog: &Dog, index: usize) -> AppResult<()> {
    if list.contains(dog) {
        return Err(AppError::duplicate(&dog.name, &dog.breed));
    }
    if index > list.len() {
        return Err(AppError::IndexOutOfBounds {
            index,
            len: list.len(),
        });
    }
    Ok(())
}

fn take_out(list: &mut DogRepository, dog: &Dog, index: usize) -> AppResult<()> {
    expect_at(list, dog, index)?;
    list.remove(dog)?;
    Ok(())
}

fn put_back(list: &mut DogRepository, dog: &Dog, index: usize) -> AppResult<()> {
    list.insert_at(index, dog.clone())
}

fn undo_adopt(
    collections: &mut Collections,
    dog: &Dog,
    repository_index: usize,
    showcase: Option<ShowcasePosition>,
    adoption_index: usize,
) -> AppResult<()> {
    expect_at(collections.adoption_list.repository(), dog, adoption_index)?;
    expect_insertable(&collections.repository, dog, repository_index)?;

    // The showcase may have been replaced or dropped since; then there is
    // nothing to restore there.
    let live_showcase = showcase.filter(|pos| {
        collections
            .showcase_if_live(pos.generation)
            .is_some_and(|s| !s.dogs().contains(dog) && pos.index <= s.dogs().len())
    });

    collections.adoption_list.remove(dog)?;
    collections.repository.insert_at(repository_index, dog.clone())?;
    if let Some(pos) = live_showcase {
        if let Some(view) = collections.showcase_if_live_mut(pos.generation) {
            view.dogs_mut().insert_at(pos.index, dog.clone())?;
        }
    }
    Ok(())
}

fn redo_adopt(
    collections: &mut Collections,
    dog: &Dog,
    repository_index: usize,
    showcase: Option<ShowcasePosition>,
    adoption_index: usize,
) -> AppResult<()> {
    expect_at(&collections.repository, dog, repository_index)?;
    expect_insertable(collections.adoption_list.repository(), dog, adoption_index)?;

    let live_showcase = showcase.filter(|pos| {
        collections
            .showcase_if_live(pos.generation)
            .is_some_and(|s| s.dogs().get(pos.index).is_some_and(|d| d.same_identity(dog)))
    });

    collections.repository.remove(dog)?;
    collections.adoption_list.insert_at(adoption_index, dog.clone())?;
    if let Some(pos) = live_showcase {
        if let Some(view) = collections.showcase_if_live_mut(pos.generation) {
            view.dogs_mut().remove(dog)?;
        }
    }
    Ok(())
}
