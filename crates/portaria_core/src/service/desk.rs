//! Front-desk facade: the single entry point for UI consumers.
//!
//! # Responsibility
//! - Expose the role-scoped dashboard operations as one synchronous API.
//! - Stamp "now" values (entry/exit times, dates, delivery timestamps)
//!   through the injected clock.
//!
//! # Invariants
//! - Filtering is a linear scan over the full collection preserving
//!   persisted order; no filter reaches a repository and no index exists.
//! - Required-field validation is the calling form's responsibility;
//!   this boundary trusts its inputs (documented trust boundary).
//! - All updates are full-collection read-modify-write round trips:
//!   last-writer-wins, unsafe under concurrent writers (two tabs), which
//!   is accepted under the single-session model.

use crate::clock::{Clock, SystemClock};
use crate::model::communication::{Communication, CommunicationEdit, Priority};
use crate::model::correspondence::{Correspondence, CorrespondenceKind, DeliveryStatus};
use crate::model::theme::Theme;
use crate::model::user::{Role, User};
use crate::model::visitor::{Visitor, VisitorStatus};
use crate::prefs::ThemePreferences;
use crate::repo::communication_repo::CommunicationRepository;
use crate::repo::correspondence_repo::CorrespondenceRepository;
use crate::repo::user_repo::{UserDraft, UserRepository};
use crate::repo::visitor_repo::VisitorRepository;
use crate::repo::RepoResult;
use crate::seed::seed_defaults;
use crate::session::{AuthOutcome, SessionManager};
use crate::store::Store;

/// Facade over one store, owning it for the life of the process.
pub struct Desk<S: Store> {
    store: S,
    clock: Box<dyn Clock>,
}

impl<S: Store> Desk<S> {
    /// Creates a desk over the given store with the system clock.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    /// Creates a desk with a caller-provided clock, for deterministic
    /// timestamp stamping in tests.
    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Borrows the underlying store, e.g. for wire-level inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Seeds baseline data into absent collections. Idempotent.
    pub fn seed(&self) -> RepoResult<()> {
        seed_defaults(&self.store, self.clock.as_ref())
    }

    // ---- users -----------------------------------------------------

    /// Lists accounts, optionally restricted to one role.
    pub fn list_users(&self, role: Option<Role>) -> RepoResult<Vec<User>> {
        let mut users = UserRepository::new(&self.store).get_all()?;
        if let Some(role) = role {
            users.retain(|user| user.role == role);
        }
        Ok(users)
    }

    /// Registers a new account; rejects duplicate logins.
    pub fn register_user(&self, draft: UserDraft) -> RepoResult<User> {
        UserRepository::new(&self.store).add(draft)
    }

    // ---- visitors --------------------------------------------------

    /// Lists visitors, optionally restricted by residence and status,
    /// in insertion order.
    pub fn list_visitors(
        &self,
        residence: Option<&str>,
        status: Option<VisitorStatus>,
    ) -> RepoResult<Vec<Visitor>> {
        let mut visitors = VisitorRepository::new(&self.store).get_all()?;
        if let Some(residence) = residence {
            visitors.retain(|visitor| visitor.residence_number == residence);
        }
        if let Some(status) = status {
            visitors.retain(|visitor| visitor.status == status);
        }
        Ok(visitors)
    }

    /// Checks a visitor in. The entry time defaults to now when the
    /// form did not supply one; the entry date is always today.
    pub fn check_in_visitor(
        &self,
        name: &str,
        residence_number: &str,
        entry_time: Option<&str>,
    ) -> RepoResult<Visitor> {
        let entry_time = match entry_time {
            Some(entry_time) => entry_time.to_string(),
            None => self.clock.wall_time(),
        };
        VisitorRepository::new(&self.store).check_in(
            name,
            residence_number,
            entry_time,
            self.clock.calendar_day(),
        )
    }

    /// Checks a visitor out, stamping the exit time. Idempotent.
    pub fn check_out_visitor(&self, id: &str) -> RepoResult<()> {
        VisitorRepository::new(&self.store).check_out(id, &self.clock.wall_time())
    }

    // ---- correspondences -------------------------------------------

    /// Lists correspondences, optionally restricted by residence and
    /// status, in insertion order.
    pub fn list_correspondences(
        &self,
        residence: Option<&str>,
        status: Option<DeliveryStatus>,
    ) -> RepoResult<Vec<Correspondence>> {
        let mut correspondences = CorrespondenceRepository::new(&self.store).get_all()?;
        if let Some(residence) = residence {
            correspondences.retain(|item| item.residence_number == residence);
        }
        if let Some(status) = status {
            correspondences.retain(|item| item.status == status);
        }
        Ok(correspondences)
    }

    /// Registers an incoming item, stamping the arrival timestamp.
    pub fn register_correspondence(
        &self,
        residence_number: &str,
        kind: CorrespondenceKind,
        description: &str,
    ) -> RepoResult<Correspondence> {
        CorrespondenceRepository::new(&self.store).register(
            residence_number,
            kind,
            description,
            self.clock.timestamp(),
        )
    }

    /// Marks an item delivered, stamping the delivery timestamp.
    /// Idempotent.
    pub fn mark_delivered(&self, id: &str) -> RepoResult<()> {
        CorrespondenceRepository::new(&self.store).mark_delivered(id, &self.clock.timestamp())
    }

    // ---- communications --------------------------------------------

    /// Lists announcements in persisted newest-first order, optionally
    /// restricted to one priority.
    pub fn list_communications(&self, priority: Option<Priority>) -> RepoResult<Vec<Communication>> {
        let mut communications = CommunicationRepository::new(&self.store).get_all()?;
        if let Some(priority) = priority {
            communications.retain(|comm| comm.priority == priority);
        }
        Ok(communications)
    }

    /// Publishes an announcement stamped with the current timestamp.
    pub fn publish_communication(
        &self,
        title: &str,
        content: &str,
        priority: Priority,
        author: &str,
    ) -> RepoResult<Communication> {
        CommunicationRepository::new(&self.store).publish(
            title,
            content,
            priority,
            author,
            self.clock.timestamp(),
        )
    }

    /// Edits an announcement in place; unknown ids are a no-op.
    pub fn edit_communication(&self, id: &str, edit: &CommunicationEdit) -> RepoResult<()> {
        CommunicationRepository::new(&self.store).edit(id, edit)
    }

    /// Deletes an announcement; unknown ids are a no-op.
    pub fn delete_communication(&self, id: &str) -> RepoResult<()> {
        CommunicationRepository::new(&self.store).delete(id)
    }

    // ---- session & theme -------------------------------------------

    /// Authenticates and opens a session on success.
    pub fn login(&self, login: &str, password: &str) -> RepoResult<AuthOutcome> {
        SessionManager::new(&self.store).authenticate(login, password)
    }

    /// Ends the current session. Idempotent.
    pub fn logout(&self) -> RepoResult<()> {
        SessionManager::new(&self.store).end_session()
    }

    /// Returns the logged-in user snapshot, if any.
    pub fn current_user(&self) -> RepoResult<Option<User>> {
        SessionManager::new(&self.store).current_user()
    }

    /// Returns the active theme: the current user's stored preference,
    /// or the default when no session or no preference exists.
    pub fn theme(&self) -> RepoResult<Theme> {
        match self.current_user()? {
            Some(user) => ThemePreferences::new(&self.store).theme_for(&user.id),
            None => Ok(Theme::default()),
        }
    }

    /// Stores the theme choice for the current user. A no-op when no
    /// session is open.
    pub fn set_theme(&self, theme: Theme) -> RepoResult<()> {
        if let Some(user) = self.current_user()? {
            ThemePreferences::new(&self.store).set_theme(&user.id, theme)?;
        }
        Ok(())
    }
}
