//! Announcement repository.
//!
//! # Invariants
//! - `publish` inserts at the head: the persisted order is newest-first,
//!   unlike every other collection. Callers sorting for display must use
//!   the `date` field, never array position.
//! - `edit` and `delete` are no-ops for unknown ids.

use crate::model::communication::{Communication, CommunicationEdit, Priority};
use crate::repo::{load_collection, store_collection, RepoResult, COMMUNICATIONS_KEY};
use crate::store::Store;
use log::{debug, info};

/// Repository for the `communications` collection.
pub struct CommunicationRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> CommunicationRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns every announcement in persisted (newest-first) order.
    pub fn get_all(&self) -> RepoResult<Vec<Communication>> {
        load_collection(self.store, COMMUNICATIONS_KEY)
    }

    /// Replaces the whole collection.
    pub fn save_all(&self, communications: &[Communication]) -> RepoResult<()> {
        store_collection(self.store, COMMUNICATIONS_KEY, communications)
    }

    /// Publishes an announcement at the head of the collection.
    pub fn publish(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        priority: Priority,
        author: impl Into<String>,
        date: impl Into<String>,
    ) -> RepoResult<Communication> {
        let communication = Communication::publish(title, content, priority, author, date);
        let mut communications = self.get_all()?;
        communications.insert(0, communication.clone());
        self.save_all(&communications)?;

        info!(
            "event=communication_published module=repo status=ok id={} priority={:?}",
            communication.id, communication.priority
        );
        Ok(communication)
    }

    /// Replaces the mutable fields of one announcement in place.
    ///
    /// Id and publication date survive the edit; unknown ids are a no-op.
    pub fn edit(&self, id: &str, edit: &CommunicationEdit) -> RepoResult<()> {
        let mut communications = self.get_all()?;
        let Some(communication) = communications.iter_mut().find(|comm| comm.id == id) else {
            debug!("event=communication_edited module=repo status=noop id={id} reason=not_found");
            return Ok(());
        };
        communication.apply_edit(edit);

        self.save_all(&communications)?;
        info!("event=communication_edited module=repo status=ok id={id}");
        Ok(())
    }

    /// Removes one announcement; unknown ids are a no-op.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        let mut communications = self.get_all()?;
        let before = communications.len();
        communications.retain(|comm| comm.id != id);
        if communications.len() == before {
            debug!("event=communication_deleted module=repo status=noop id={id} reason=not_found");
            return Ok(());
        }

        self.save_all(&communications)?;
        info!("event=communication_deleted module=repo status=ok id={id}");
        Ok(())
    }
}
