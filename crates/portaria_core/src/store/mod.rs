//! Namespaced key→JSON durable map.
//!
//! # Responsibility
//! - Define the storage capability every repository depends on.
//! - Provide a durable SQLite implementation and an in-memory fake.
//!
//! # Invariants
//! - `write` replaces the whole value for a key; there are no partial
//!   writes and no transactions across keys. A multi-key operation
//!   interrupted between writes can leave one key updated and not the
//!   other.
//! - Decoding of stored values is the caller's concern; the store moves
//!   opaque JSON text.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod migrations;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level storage failure.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Injected storage capability: a flat key→JSON-text map.
///
/// Every operation is synchronous and blocking; there is no caching
/// layer between callers and the backing medium.
pub trait Store {
    /// Returns the raw JSON text stored under `key`, if any.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key` entirely. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> StoreResult<()>;
}
