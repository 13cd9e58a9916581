use crate::domain::model::{Blueprint, Point};
use crate::domain::ports::BlueprintStore;
use crate::utils::error::{RegistryError, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

/// Durable store: one JSON file per blueprint under a base directory, with a
/// concurrent in-memory index as the source of truth for lookups.
///
/// The index satisfies the same per-key atomicity as the in-memory backend;
/// the file for a record is rewritten while its entry guard is held, so
/// concurrent appends to one blueprint serialize and lose nothing.
pub struct JsonFileStore {
    base_dir: PathBuf,
    index: DashMap<(String, String), Blueprint>,
}

impl JsonFileStore {
    /// Opens (or creates) the directory and loads every `*.json` record in it.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;

        let index = DashMap::new();
        for entry in fs::read_dir(&base_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let data = fs::read(&path)?;
            let bp: Blueprint = serde_json::from_slice(&data)?;
            index.insert(bp.key(), bp);
        }

        tracing::debug!(
            "Loaded {} blueprints from {}",
            index.len(),
            base_dir.display()
        );
        Ok(Self { base_dir, index })
    }

    /// Filename derived from the sanitized key plus a hash of the raw key,
    /// so authors/names that sanitize to the same text still get distinct
    /// files. The identity inside the file is authoritative, not the name.
    fn record_path(&self, author: &str, name: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        (author, name).hash(&mut hasher);
        let file_name = format!(
            "{}__{}-{:016x}.json",
            sanitize(author),
            sanitize(name),
            hasher.finish()
        );
        self.base_dir.join(file_name)
    }

    fn persist(&self, bp: &Blueprint) -> Result<()> {
        let path = self.record_path(&bp.author, &bp.name);
        let data = serde_json::to_vec_pretty(bp)?;
        fs::write(path, data)?;
        Ok(())
    }
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect()
}

impl BlueprintStore for JsonFileStore {
    fn save(&self, bp: Blueprint) -> Result<()> {
        match self.index.entry(bp.key()) {
            Entry::Occupied(_) => Err(RegistryError::AlreadyExists {
                author: bp.author,
                name: bp.name,
            }),
            Entry::Vacant(slot) => {
                // Insert first so the key is claimed atomically, then write
                // the file; roll the claim back if the write fails.
                let record = slot.insert(bp);
                if let Err(e) = self.persist(record.value()) {
                    let key = record.key().clone();
                    drop(record);
                    self.index.remove(&key);
                    return Err(e);
                }
                Ok(())
            }
        }
    }

    fn get(&self, author: &str, name: &str) -> Result<Blueprint> {
        self.index
            .get(&(author.to_string(), name.to_string()))
            .map(|record| record.value().clone())
            .ok_or_else(|| RegistryError::NotFound {
                author: author.to_string(),
                name: name.to_string(),
            })
    }

    fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let found: Vec<Blueprint> = self
            .index
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
        self.index
            .iter()
            .map(|record| record.value().clone())
            .collect()
    }

    fn add_point(&self, author: &str, name: &str, x: i32, y: i32) -> Result<()> {
        match self.index.get_mut(&(author.to_string(), name.to_string())) {
            Some(mut record) => {
                record.points.push(Point::new(x, y));
                // Rewrite under the entry guard so concurrent appends to
                // this record serialize.
                self.persist(record.value())
            }
            None => Err(RegistryError::NotFound {
                author: author.to_string(),
                name: name.to_string(),
            }),
        }
    }
}

impl std::fmt::Debug for JsonFileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonFileStore")
            .field("base_dir", &self.base_dir)
            .field("records", &self.index.len())
            .finish()
    }
}
