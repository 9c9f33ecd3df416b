//! # Storage Layer
//!
//! Persistence is split in two, following a "how" vs "what" boundary:
//!
//! - [`StorageBackend`]: raw blob I/O. A backend reads and writes whole
//!   serialized values under fixed string keys and knows nothing about
//!   records. Implementations:
//!   - [`fs_backend::FsBackend`]: production storage, one JSON file per key
//!     in the data directory, written atomically (tmp file + rename) so a
//!     reader never observes a partially written collection.
//!   - [`mem_backend::MemBackend`]: in-memory storage for tests, with
//!     simulated write failures for exercising rollback paths.
//!
//! - [`records::RecordStore`]: the canonical in-memory record collection and
//!   the only component allowed to mutate it. It loads the records blob once
//!   at construction and saves the full collection after every successful
//!   mutation, so the collection is never partially persisted and there is
//!   no dirty staging buffer.
//!
//! ## Key Layout
//!
//! Three independently-owned blobs share the same medium under distinct,
//! non-colliding keys (see [`keys`]):
//!
//! ```text
//! spendz-records    # the full record collection (owned by RecordStore)
//! spendz-budget     # numeric budget threshold (owned by settings::Budget)
//! spendz-settings   # display settings (owned by settings::DisplaySettings)
//! ```

use crate::error::Result;

pub mod fs_backend;
pub mod mem_backend;
pub mod records;

/// Fixed storage keys. Each blob has exactly one owner; the names must never
/// collide since all three live in the same medium.
pub mod keys {
    pub const RECORDS: &str = "spendz-records";
    pub const BUDGET: &str = "spendz-budget";
    pub const SETTINGS: &str = "spendz-settings";
}

/// Abstract interface for raw blob storage.
///
/// Methods take `&self`; backends that need mutation use interior mutability
/// (the process is single-threaded and every store operation completes fully
/// before the next begins, so there is no interleaving to guard against).
pub trait StorageBackend {
    /// Read the blob stored under `key`. `Ok(None)` if absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `payload` under `key`, replacing any previous value.
    ///
    /// MUST be atomic from the caller's point of view: a concurrent or
    /// subsequent `read` sees either the old payload or the new one, never a
    /// partial write. Fails with `SpendzError::Persistence` if the medium
    /// rejects the write.
    fn write(&self, key: &str, payload: &str) -> Result<()>;

    /// Delete the blob under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
