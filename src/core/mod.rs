pub mod filters;
pub mod seed;
pub mod service;

pub use crate::domain::model::{Blueprint, Point};
pub use crate::domain::ports::{BlueprintFilter, BlueprintStore, RegistryConfig};
pub use crate::utils::error::Result;
