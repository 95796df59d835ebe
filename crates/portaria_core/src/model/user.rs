//! Resident and administrator account model.
//!
//! # Responsibility
//! - Define the canonical User record shared by authentication and the
//!   role-scoped dashboards.
//!
//! # Invariants
//! - `login` is unique across the whole collection (enforced at the
//!   repository boundary, see `repo::user_repo`).
//! - `residence_number` is required iff `role == Role::Resident`.
//! - `password` is stored and compared in plaintext; hardening lives
//!   behind the `CredentialChecker` seam, not in this record.

use serde::{Deserialize, Serialize};

/// Access level selecting which dashboard and record subsets a session
/// may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Building administration; sees every collection unfiltered.
    Admin,
    /// Unit resident; sees records for their own residence number.
    Resident,
}

/// Canonical account record.
///
/// Serialized field names follow the persisted wire layout: camelCase,
/// with `role` stored under the historical `type` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable opaque id, `user-{uuid}` for records created at runtime.
    pub id: String,
    /// Login name, matched exactly and case-sensitively.
    pub login: String,
    /// Plaintext password. See module invariants.
    pub password: String,
    #[serde(rename = "type")]
    pub role: Role,
    pub name: String,
    /// Unit identifier linking visitors and correspondences by value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residence_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    /// Returns whether this account may act as building administration.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
