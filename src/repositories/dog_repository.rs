// src/repositories/dog_repository.rs
//
// Ordered, identity-unique list of dogs.
//
// Positions are meaningful: history commands capture them so that an undo
// puts a dog back exactly where it was.

use serde::{Deserialize, Serialize};

use crate::domain::Dog;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DogRepository {
    dogs: Vec<Dog>,
}

impl DogRepository {
    pub fn new() -> Self {
        Self { dogs: Vec::new() }
    }

    /// Build a repository from loaded dogs, rejecting duplicate identities
    pub fn from_dogs(dogs: Vec<Dog>) -> AppResult<Self> {
        let mut repo = Self::with_capacity(dogs.len());
        for dog in dogs {
            repo.add(dog)?;
        }
        Ok(repo)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            dogs: Vec::with_capacity(capacity),
        }
    }

    /// Append a dog at the end
    pub fn add(&mut self, dog: Dog) -> AppResult<()> {
        self.ensure_absent(&dog)?;
        self.dogs.push(dog);
        Ok(())
    }

    /// Insert a dog at `index`, shifting later dogs right
    pub fn insert_at(&mut self, index: usize, dog: Dog) -> AppResult<()> {
        self.ensure_absent(&dog)?;
        if index > self.dogs.len() {
            return Err(AppError::IndexOutOfBounds {
                index,
                len: self.dogs.len(),
            });
        }
        self.dogs.insert(index, dog);
        Ok(())
    }

    /// Remove the dog with the same identity, returning the position it held
    pub fn remove(&mut self, dog: &Dog) -> AppResult<usize> {
        let index = self
            .index_of(dog)
            .ok_or_else(|| AppError::not_found(&dog.name, &dog.breed))?;
        self.dogs.remove(index);
        Ok(index)
    }

    /// Replace `old` with `new` in place.
    ///
    /// `new` may keep the identity of `old`; it may not take the identity
    /// of any other dog in the list.
    pub fn update(&mut self, old: &Dog, new: Dog) -> AppResult<usize> {
        let index = self
            .index_of(old)
            .ok_or_else(|| AppError::not_found(&old.name, &old.breed))?;

        if let Some(other) = self.index_of(&new) {
            if other != index {
                return Err(AppError::duplicate(&new.name, &new.breed));
            }
        }

        self.dogs[index] = new;
        Ok(index)
    }

    pub fn find_by_name_and_breed(&self, name: &str, breed: &str) -> AppResult<&Dog> {
        self.dogs
            .iter()
            .find(|d| d.is(name, breed))
            .ok_or_else(|| AppError::not_found(name, breed))
    }

    pub fn index_of(&self, dog: &Dog) -> Option<usize> {
        self.dogs.iter().position(|d| d.same_identity(dog))
    }

    pub fn contains(&self, dog: &Dog) -> bool {
        self.index_of(dog).is_some()
    }

    /// Independent copy holding the matching dogs in their original order
    pub fn filter<P>(&self, predicate: P) -> DogRepository
    where
        P: Fn(&Dog) -> bool,
    {
        Self {
            dogs: self.dogs.iter().filter(|d| predicate(d)).cloned().collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Dog> {
        self.dogs.get(index)
    }

    pub fn dogs(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dog> {
        self.dogs.iter()
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    fn ensure_absent(&self, dog: &Dog) -> AppResult<()> {
        if self.contains(dog) {
            return Err(AppError::duplicate(&dog.name, &dog.breed));
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DogRepository {
    type Item = &'a Dog;
    type IntoIter = std::slice::Iter<'a, Dog>;

    fn into_iter(self) -> Self::IntoIter {
        self.dogs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(repo: &DogRepository) -> Vec<&str> {
        repo.iter().map(|d| d.name.as_str()).collect()
    }

    fn sample() -> DogRepository {
        DogRepository::from_dogs(vec![
            Dog::new("mec", "poodle", 4, ""),
            Dog::new("aydo", "beagle", 2, ""),
            Dog::new("ossi", "poodle", 3, ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_add_appends() {
        let mut repo = sample();
        repo.add(Dog::new("zani", "pug", 3, "")).unwrap();
        assert_eq!(names(&repo), vec!["mec", "aydo", "ossi", "zani"]);
    }

    #[test]
    fn test_add_duplicate_leaves_repo_unchanged() {
        let mut repo = sample();
        let err = repo.add(Dog::new("mec", "poodle", 10, "other")).unwrap_err();
        assert!(matches!(err, AppError::Duplicate { .. }));
        assert_eq!(repo.len(), 3);
        assert_eq!(repo.get(0).unwrap().age, 4);
    }

    #[test]
    fn test_from_dogs_rejects_duplicates() {
        let result = DogRepository::from_dogs(vec![
            Dog::new("mec", "poodle", 4, ""),
            Dog::new("mec", "poodle", 5, ""),
        ]);
        assert!(matches!(result, Err(AppError::Duplicate { .. })));
    }

    #[test]
    fn test_remove_reports_position() {
        let mut repo = sample();
        let index = repo.remove(&Dog::new("aydo", "beagle", 0, "")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(names(&repo), vec!["mec", "ossi"]);
    }

    #[test]
    fn test_remove_missing_fails() {
        let mut repo = sample();
        let err = repo.remove(&Dog::new("rex", "husky", 1, "")).unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_insert_at_restores_position() {
        let mut repo = sample();
        let dog = repo.get(0).cloned().unwrap();
        repo.remove(&dog).unwrap();
        repo.insert_at(0, dog).unwrap();
        assert_eq!(names(&repo), vec!["mec", "aydo", "ossi"]);
    }

    #[test]
    fn test_insert_past_end_fails() {
        let mut repo = sample();
        let err = repo.insert_at(4, Dog::new("zani", "pug", 3, "")).unwrap_err();
        assert!(matches!(err, AppError::IndexOutOfBounds { index: 4, len: 3 }));
    }

    #[test]
    fn test_update_keeps_position() {
        let mut repo = sample();
        let old = Dog::new("aydo", "beagle", 0, "");
        let index = repo.update(&old, Dog::new("bruno", "beagle", 5, "x")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(names(&repo), vec!["mec", "bruno", "ossi"]);
    }

    #[test]
    fn test_update_same_identity_changes_payload() {
        let mut repo = sample();
        let old = Dog::new("mec", "poodle", 0, "");
        repo.update(&old, Dog::new("mec", "poodle", 7, "new.jpg")).unwrap();
        assert_eq!(repo.get(0).unwrap().age, 7);
    }

    #[test]
    fn test_update_to_other_identity_fails() {
        let mut repo = sample();
        let old = Dog::new("mec", "poodle", 0, "");
        let err = repo.update(&old, Dog::new("ossi", "poodle", 1, "")).unwrap_err();
        assert!(matches!(err, AppError::Duplicate { .. }));
        assert_eq!(names(&repo), vec!["mec", "aydo", "ossi"]);
    }

    #[test]
    fn test_find_by_name_and_breed() {
        let repo = sample();
        assert_eq!(repo.find_by_name_and_breed("ossi", "poodle").unwrap().age, 3);
        assert!(repo.find_by_name_and_breed("ossi", "beagle").is_err());
    }

    #[test]
    fn test_filter_is_independent_copy() {
        let repo = sample();
        let mut poodles = repo.filter(|d| d.breed == "poodle");
        assert_eq!(names(&poodles), vec!["mec", "ossi"]);

        poodles.remove(&Dog::new("mec", "poodle", 0, "")).unwrap();
        assert_eq!(repo.len(), 3);
    }
}
