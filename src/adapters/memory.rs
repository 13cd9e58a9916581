use crate::domain::model::{Blueprint, Point};
use crate::domain::ports::BlueprintStore;
use crate::utils::error::{RegistryError, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// In-memory store backed by a sharded concurrent map.
///
/// `save` goes through the map's entry API, so check-absence-then-insert is
/// a single step under the shard lock; `add_point` appends while holding the
/// entry's write guard. Operations on distinct keys land on independent
/// shards and do not take a global lock.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: DashMap<(String, String), Blueprint>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

impl BlueprintStore for InMemoryStore {
    fn save(&self, bp: Blueprint) -> Result<()> {
        match self.records.entry(bp.key()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists {
                author: bp.author,
                name: bp.name,
            }),
            Entry::Vacant(slot) => {
                slot.insert(bp);
                Ok(())
            }
        }
    }

    fn get(&self, author: &str, name: &str) -> Result<Blueprint> {
        self.records
            .get(&(author.to_string(), name.to_string()))
            .map(|record| record.value().clone())
            .ok_or_else(|| RegistryError::NotFound {
                author: author.to_string(),
                name: name.to_string(),
            })
    }

    fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let found: Vec<Blueprint> = self
            .records
            .iter()
            .filter(|record| record.key().0 == author)
            .map(|record| record.value().clone())
            .collect();

        if found.is_empty() {
            return Err(RegistryError::AuthorNotFound {
                author: author.to_string(),
            });
        }
        Ok(found)
    }

    fn get_all(&self) -> Vec<Blueprint> {
        self.records
            .iter()
            .map(|record| record.value().clone())
            .collect()
    }

    fn add_point(&self, author: &str, name: &str, x: i32, y: i32) -> Result<()> {
        match self
            .records
            .get_mut(&(author.to_string(), name.to_string()))
        {
            Some(mut record) => {
                record.points.push(Point::new(x, y));
                Ok(())
            }
            None => Err(RegistryError::NotFound {
                author: author.to_string(),
                name: name.to_string(),
            }),
        }
    }
}
