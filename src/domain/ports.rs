use crate::adapters::StoreBackend;
use crate::core::filters::FilterKind;
use crate::domain::model::Blueprint;
use crate::utils::error::Result;

/// A pure point-reduction strategy. Implementations never mutate the input
/// and never fail for a well-formed blueprint.
pub trait BlueprintFilter: Send + Sync {
    fn apply(&self, bp: &Blueprint) -> Blueprint;
}

/// Storage contract shared by every backend.
///
/// All operations are keyed by `(author, name)` and must be safe to call
/// concurrently from multiple threads on a shared instance:
/// - `save` performs an atomic check-absence-then-insert; of N concurrent
///   saves to the same key exactly one succeeds.
/// - `add_point` appends atomically per key; concurrent appends lose nothing.
/// - Reads return the canonical (unfiltered) record, never a torn one.
pub trait BlueprintStore: Send + Sync {
    /// Stores a new blueprint. Fails with `AlreadyExists` when the
    /// `(author, name)` key is already present.
    fn save(&self, bp: Blueprint) -> Result<()>;

    /// Fails with `NotFound` when no record matches.
    fn get(&self, author: &str, name: &str) -> Result<Blueprint>;

    /// All records of one author, in no guaranteed order. Fails with
    /// `AuthorNotFound` when the author has no records.
    fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>>;

    /// Every stored record; empty when the store is empty. Never fails.
    fn get_all(&self) -> Vec<Blueprint>;

    /// Appends one point to the stored sequence of the matching record.
    /// Fails with `NotFound` when no record matches.
    fn add_point(&self, author: &str, name: &str, x: i32, y: i32) -> Result<()>;
}

/// Configuration surface the binary wires the registry from. Resolved once
/// at startup; changing the filter or backend requires a restart.
pub trait RegistryConfig: Send + Sync {
    fn filter_kind(&self) -> FilterKind;
    fn backend(&self) -> StoreBackend;
    fn data_dir(&self) -> &str;
    fn seed(&self) -> bool;
}
