//! Repository layer over the key-value store.
//!
//! # Responsibility
//! - Own one logical collection per repository, keyed by the persisted
//!   layout (`users`, `visitors`, `correspondences`, `communications`).
//! - Keep JSON codec details inside this boundary.
//!
//! # Invariants
//! - Repositories are the only mutators of persisted collections; all
//!   updates are full-collection read-modify-write round trips.
//! - Malformed or missing persisted data reads as the empty collection
//!   (fail-open) and is surfaced through a `decode_failed` warn log, not
//!   an error.
//! - Operating on an id absent from its collection is a silent no-op.

use crate::store::{Store, StoreError};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod communication_repo;
pub mod correspondence_repo;
pub mod user_repo;
pub mod visitor_repo;

pub const USERS_KEY: &str = "users";
pub const VISITORS_KEY: &str = "visitors";
pub const CORRESPONDENCES_KEY: &str = "correspondences";
pub const COMMUNICATIONS_KEY: &str = "communications";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and invariant failures.
#[derive(Debug)]
pub enum RepoError {
    Store(StoreError),
    Encode(serde_json::Error),
    /// A user with this login already exists.
    DuplicateLogin(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode collection: {err}"),
            Self::DuplicateLogin(login) => write!(f, "login already taken: {login}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::DuplicateLogin(_) => None,
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Reads and decodes a whole collection, failing open on bad data.
///
/// An absent key and an undecodable value both yield the empty
/// collection; the latter additionally emits a `decode_failed` warning
/// so recovery stays visible.
pub(crate) fn load_collection<E>(store: &impl Store, key: &str) -> RepoResult<Vec<E>>
where
    E: DeserializeOwned,
{
    let Some(raw) = store.read(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str(&raw) {
        Ok(items) => Ok(items),
        Err(err) => {
            warn!("event=decode_failed module=repo status=recovered key={key} error={err}");
            Ok(Vec::new())
        }
    }
}

/// Encodes and writes a whole collection under its key.
pub(crate) fn store_collection<E>(store: &impl Store, key: &str, items: &[E]) -> RepoResult<()>
where
    E: Serialize,
{
    let raw = serde_json::to_string(items)?;
    store.write(key, &raw)?;
    Ok(())
}
