// src/repositories/json_store.rs
//
// ShelterStore keeping each list in a pretty-printed JSON file

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::Dog;
use crate::error::PersistenceResult;
use crate::repositories::store::{ListKind, ShelterStore};

#[derive(Debug, Clone)]
pub struct JsonShelterStore {
    dir: PathBuf,
}

impl JsonShelterStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File holding `list`: `{dir}/{list}.json`
    pub fn path_for(&self, list: ListKind) -> PathBuf {
        self.dir.join(format!("{}.json", list.as_str()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ShelterStore for JsonShelterStore {
    fn load(&self, list: ListKind) -> PersistenceResult<Vec<Dog>> {
        let path = self.path_for(list);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let dogs: Vec<Dog> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} dogs from {}", dogs.len(), path.display());
        Ok(dogs)
    }

    fn save(&self, list: ListKind, dogs: &[Dog]) -> PersistenceResult<()> {
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(list);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(dogs)?)?;
        fs::rename(&tmp, &path)?;

        log::debug!("Saved {} dogs to {}", dogs.len(), path.display());
        Ok(())
    }
}
