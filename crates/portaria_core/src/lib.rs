//! Core domain logic for Portaria, a residential building manager.
//! This crate is the single source of truth for business invariants:
//! account uniqueness, visitor presence and correspondence delivery
//! lifecycles, session scoping and per-user theme preferences.

pub mod clock;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod repo;
pub mod seed;
pub mod service;
pub mod session;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::communication::{Communication, CommunicationEdit, Priority};
pub use model::correspondence::{Correspondence, CorrespondenceKind, DeliveryStatus};
pub use model::theme::Theme;
pub use model::user::{Role, User};
pub use model::visitor::{Visitor, VisitorStatus};
pub use prefs::ThemePreferences;
pub use repo::communication_repo::CommunicationRepository;
pub use repo::correspondence_repo::CorrespondenceRepository;
pub use repo::user_repo::{UserDraft, UserRepository};
pub use repo::visitor_repo::VisitorRepository;
pub use repo::{RepoError, RepoResult};
pub use seed::seed_defaults;
pub use service::desk::Desk;
pub use session::{
    AuthOutcome, CredentialChecker, PlaintextCredentials, SessionManager, SESSION_KEY,
};
pub use store::{MemoryStore, SqliteStore, Store, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
