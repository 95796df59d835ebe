//! Correspondence repository and delivery transitions.
//!
//! # Invariants
//! - New correspondences append in insertion order and start `waiting`.
//! - `mark_delivered` is idempotent: an already-delivered or unknown id
//!   leaves the collection untouched.

use crate::model::correspondence::{Correspondence, CorrespondenceKind};
use crate::repo::{load_collection, store_collection, RepoResult, CORRESPONDENCES_KEY};
use crate::store::Store;
use log::{debug, info};

/// Repository for the `correspondences` collection.
pub struct CorrespondenceRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> CorrespondenceRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns every correspondence in insertion order.
    pub fn get_all(&self) -> RepoResult<Vec<Correspondence>> {
        load_collection(self.store, CORRESPONDENCES_KEY)
    }

    /// Replaces the whole collection.
    pub fn save_all(&self, correspondences: &[Correspondence]) -> RepoResult<()> {
        store_collection(self.store, CORRESPONDENCES_KEY, correspondences)
    }

    /// Registers an incoming item held at the front desk.
    pub fn register(
        &self,
        residence_number: impl Into<String>,
        kind: CorrespondenceKind,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> RepoResult<Correspondence> {
        let item = Correspondence::register(residence_number, kind, description, date);
        let mut correspondences = self.get_all()?;
        correspondences.push(item.clone());
        self.save_all(&correspondences)?;

        info!(
            "event=correspondence_registered module=repo status=ok id={} residence={}",
            item.id, item.residence_number
        );
        Ok(item)
    }

    /// Records handover of an item to its resident.
    ///
    /// A no-op when the id is unknown or the item was already delivered.
    pub fn mark_delivered(&self, id: &str, delivered_at: &str) -> RepoResult<()> {
        let mut correspondences = self.get_all()?;
        let Some(item) = correspondences.iter_mut().find(|item| item.id == id) else {
            debug!("event=correspondence_delivered module=repo status=noop id={id} reason=not_found");
            return Ok(());
        };
        if !item.record_delivery(delivered_at) {
            debug!(
                "event=correspondence_delivered module=repo status=noop id={id} reason=already_delivered"
            );
            return Ok(());
        }

        self.save_all(&correspondences)?;
        info!("event=correspondence_delivered module=repo status=ok id={id}");
        Ok(())
    }
}
