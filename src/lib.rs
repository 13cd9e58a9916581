pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{InMemoryStore, JsonFileStore, StoreBackend};
pub use crate::core::filters::{FilterKind, IdentityFilter, RedundancyFilter, UndersamplingFilter};
pub use crate::core::seed::seed_examples;
pub use crate::core::service::BlueprintService;
pub use crate::domain::model::{Blueprint, Point};
pub use crate::domain::ports::{BlueprintFilter, BlueprintStore, RegistryConfig};
pub use crate::utils::error::{RegistryError, Result};
