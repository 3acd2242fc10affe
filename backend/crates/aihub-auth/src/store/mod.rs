//! Key-value persistence for client-side state.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StoreErrorResult, StoreError};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// A string key-value store with explicit get/set/clear capability.
///
/// The session client owns its store exclusively; nothing else is expected
/// to write the keys it uses.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StoreErrorResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StoreErrorResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn clear(&self, key: &str) -> StoreErrorResult<()>;
}
