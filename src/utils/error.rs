use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Blueprint already exists: {author}/{name}")]
    AlreadyExists { author: String, name: String },

    #[error("Blueprint not found: {author}/{name}")]
    NotFound { author: String, name: String },

    #[error("No blueprints for author: {author}")]
    AuthorNotFound { author: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfig { field: String },
}

impl RegistryError {
    /// True for both key misses and empty-author misses.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::NotFound { .. } | RegistryError::AuthorNotFound { .. }
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, RegistryError::AlreadyExists { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
