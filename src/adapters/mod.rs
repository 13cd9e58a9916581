pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use crate::domain::ports::BlueprintStore;
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Which store realization to install, chosen once from configuration. The
/// service only ever sees the `BlueprintStore` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    File,
}

impl StoreBackend {
    pub const NAMES: [&'static str; 2] = ["memory", "file"];

    pub fn build(self, data_dir: &str) -> Result<Arc<dyn BlueprintStore>> {
        match self {
            StoreBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
            StoreBackend::File => Ok(Arc::new(JsonFileStore::open(data_dir)?)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreBackend::Memory => "memory",
            StoreBackend::File => "file",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StoreBackend {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            other => Err(RegistryError::InvalidConfigValue {
                field: "store.backend".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported backend. Valid backends: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
