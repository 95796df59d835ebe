//! Visitor repository and presence transitions.
//!
//! # Invariants
//! - New visitors append in insertion order.
//! - `check_out` is idempotent: an already-left or unknown id leaves the
//!   collection untouched.

use crate::model::visitor::Visitor;
use crate::repo::{load_collection, store_collection, RepoResult, VISITORS_KEY};
use crate::store::Store;
use log::{debug, info};

/// Repository for the `visitors` collection.
pub struct VisitorRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> VisitorRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns every visitor in insertion order.
    pub fn get_all(&self) -> RepoResult<Vec<Visitor>> {
        load_collection(self.store, VISITORS_KEY)
    }

    /// Replaces the whole collection.
    pub fn save_all(&self, visitors: &[Visitor]) -> RepoResult<()> {
        store_collection(self.store, VISITORS_KEY, visitors)
    }

    /// Registers a visitor entering the building.
    pub fn check_in(
        &self,
        name: impl Into<String>,
        residence_number: impl Into<String>,
        entry_time: impl Into<String>,
        date: impl Into<String>,
    ) -> RepoResult<Visitor> {
        let visitor = Visitor::check_in(name, residence_number, entry_time, date);
        let mut visitors = self.get_all()?;
        visitors.push(visitor.clone());
        self.save_all(&visitors)?;

        info!(
            "event=visitor_check_in module=repo status=ok id={} residence={}",
            visitor.id, visitor.residence_number
        );
        Ok(visitor)
    }

    /// Records a visitor leaving the building.
    ///
    /// A no-op when the id is unknown or the visitor already left.
    pub fn check_out(&self, id: &str, exit_time: &str) -> RepoResult<()> {
        let mut visitors = self.get_all()?;
        let Some(visitor) = visitors.iter_mut().find(|visitor| visitor.id == id) else {
            debug!("event=visitor_check_out module=repo status=noop id={id} reason=not_found");
            return Ok(());
        };
        if !visitor.record_exit(exit_time) {
            debug!("event=visitor_check_out module=repo status=noop id={id} reason=already_left");
            return Ok(());
        }

        self.save_all(&visitors)?;
        info!("event=visitor_check_out module=repo status=ok id={id}");
        Ok(())
    }
}
