//! Canonical domain model for building management records.
//!
//! # Responsibility
//! - Define the single canonical shape of every persisted entity.
//! - Provide lifecycle helpers for single-direction status transitions.
//!
//! # Invariants
//! - Every entity carries a stable opaque string id of the form
//!   `{kind}-{uuid}` and the id is never reused or rewritten.
//! - Status transitions (visitor presence, correspondence delivery) run
//!   exactly once; terminal states are never reopened.

pub mod communication;
pub mod correspondence;
pub mod theme;
pub mod user;
pub mod visitor;

use uuid::Uuid;

/// Builds a `{kind}-{uuid}` entity id.
///
/// The kind prefix keeps ids human-readable in persisted JSON; the UUID
/// part carries the uniqueness guarantee.
pub(crate) fn prefixed_id(kind: &str) -> String {
    format!("{kind}-{}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::prefixed_id;

    #[test]
    fn prefixed_id_keeps_kind_and_is_unique() {
        let first = prefixed_id("visitor");
        let second = prefixed_id("visitor");
        assert!(first.starts_with("visitor-"));
        assert_ne!(first, second);
    }
}
