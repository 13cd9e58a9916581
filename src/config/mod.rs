pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::adapters::StoreBackend;
#[cfg(feature = "cli")]
use crate::core::filters::FilterKind;
#[cfg(feature = "cli")]
use crate::core::RegistryConfig;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "blueprint-registry")]
#[command(about = "Registry of named 2D blueprints with swappable point-reduction filters")]
pub struct CliConfig {
    /// Point-reduction filter applied on reads
    #[arg(long, value_enum, default_value_t = FilterKind::Identity)]
    pub filter: FilterKind,

    /// Store backend holding the canonical records
    #[arg(long = "store", value_enum, default_value_t = StoreBackend::Memory)]
    pub backend: StoreBackend,

    /// Directory used by the file backend
    #[arg(long, default_value = "./data")]
    pub data_dir: String,

    /// Load example blueprints into an empty store
    #[arg(long)]
    pub seed: bool,

    /// Load settings from a TOML file instead of the flags above
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl RegistryConfig for CliConfig {
    fn filter_kind(&self) -> FilterKind {
        self.filter
    }

    fn backend(&self) -> StoreBackend {
        self.backend
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn seed(&self) -> bool {
        self.seed
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("data_dir", &self.data_dir)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}
