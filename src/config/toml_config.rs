use crate::adapters::StoreBackend;
use crate::core::filters::FilterKind;
use crate::core::RegistryConfig;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub registry: RegistrySection,
    pub filter: FilterSection,
    pub store: StoreSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrySection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSection {
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSection {
    pub backend: String,
    pub data_dir: Option<String>,
    pub seed: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RegistryError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values;
    /// unresolved placeholders are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("registry.name", &self.registry.name)?;
        validation::validate_one_of("filter.kind", &self.filter.kind, &FilterKind::NAMES)?;
        validation::validate_one_of("store.backend", &self.store.backend, &StoreBackend::NAMES)?;

        if let Some(data_dir) = &self.store.data_dir {
            validation::validate_path("store.data_dir", data_dir)?;
        }
        if self.store.backend == "file" {
            validation::validate_required_field("store.data_dir", &self.store.data_dir)?;
        }

        Ok(())
    }
}

impl RegistryConfig for TomlConfig {
    // validate_config rejects unknown kind/backend strings before these are
    // read, so the fallbacks only cover the unvalidated path.
    fn filter_kind(&self) -> FilterKind {
        self.filter.kind.parse().unwrap_or_default()
    }

    fn backend(&self) -> StoreBackend {
        self.store.backend.parse().unwrap_or_default()
    }

    fn data_dir(&self) -> &str {
        self.store.data_dir.as_deref().unwrap_or("./data")
    }

    fn seed(&self) -> bool {
        self.store.seed.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
