// src/repositories/sqlite_store.rs
//
// ShelterStore backed by SQLite through the r2d2 pool

use std::sync::Arc;

use rusqlite::{params, Row};

use crate::db::{
    get_connection, get_database_stats, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::domain::Dog;
use crate::error::PersistenceResult;
use crate::repositories::store::{ListKind, ShelterStore};

pub struct SqliteShelterStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteShelterStore {
    /// Wrap a pool, making sure the schema is in place and the file is sound
    pub fn new(pool: Arc<ConnectionPool>) -> PersistenceResult<Self> {
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;

            let stats = get_database_stats(&conn)?;
            log::debug!(
                "Shelter database: {} bytes, {} in shelter, {} adopted",
                stats.size_bytes,
                stats.shelter_count,
                stats.adopted_count
            );
        }
        Ok(Self { pool })
    }

    fn row_to_dog(row: &Row) -> Result<Dog, rusqlite::Error> {
        Ok(Dog {
            name: row.get("name")?,
            breed: row.get("breed")?,
            age: row.get("age")?,
            photograph: row.get("photograph")?,
        })
    }
}

impl ShelterStore for SqliteShelterStore {
    fn load(&self, list: ListKind) -> PersistenceResult<Vec<Dog>> {
        let conn = get_connection(&self.pool)?;

        let mut stmt = conn.prepare(
            "SELECT name, breed, age, photograph FROM dogs
             WHERE list = ?1 ORDER BY position",
        )?;

        let dogs = stmt
            .query_map(params![list.as_str()], Self::row_to_dog)?
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Loaded {} dogs from the {} list", dogs.len(), list);
        Ok(dogs)
    }

    fn save(&self, list: ListKind, dogs: &[Dog]) -> PersistenceResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM dogs WHERE list = ?1", params![list.as_str()])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO dogs (list, position, name, breed, age, photograph)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (position, dog) in dogs.iter().enumerate() {
                insert.execute(params![
                    list.as_str(),
                    position as i64,
                    dog.name,
                    dog.breed,
                    dog.age,
                    dog.photograph,
                ])?;
            }
        }
        tx.commit()?;

        log::debug!("Saved {} dogs to the {} list", dogs.len(), list);
        Ok(())
    }
}
