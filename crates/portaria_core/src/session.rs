//! Current-session management.
//!
//! # Responsibility
//! - Authenticate login/password pairs against the user collection.
//! - Persist and read back the single `current-session` record.
//!
//! # Invariants
//! - A failed authentication never creates partial session state.
//! - The session record is the full User snapshot taken at login time;
//!   it is never revalidated against the user collection, so a password
//!   change does not invalidate a live session until explicit logout.
//! - At most one session record exists; there is no token and no expiry.

use crate::model::user::User;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoResult;
use crate::store::Store;
use log::{info, warn};

pub const SESSION_KEY: &str = "current-session";

/// Password verification seam.
///
/// The production policy is plaintext equality (carried over from the
/// source system); a hashing scheme drops in behind this trait without
/// touching the session flow.
pub trait CredentialChecker {
    fn verify(&self, user: &User, candidate: &str) -> bool;
}

/// Exact plaintext comparison, the historical credential policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentials;

impl CredentialChecker for PlaintextCredentials {
    fn verify(&self, user: &User, candidate: &str) -> bool {
        user.password == candidate
    }
}

/// Outcome of an authentication attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Credentials matched; the session record now holds this user.
    Authenticated(User),
    /// Unknown login or wrong password. No session state was created.
    Rejected,
}

/// Session manager bound to one store.
pub struct SessionManager<'s, S: Store> {
    store: &'s S,
    checker: Box<dyn CredentialChecker>,
}

impl<'s, S: Store> SessionManager<'s, S> {
    /// Creates a manager with the plaintext credential policy.
    pub fn new(store: &'s S) -> Self {
        Self::with_checker(store, Box::new(PlaintextCredentials))
    }

    /// Creates a manager with a caller-provided credential policy.
    pub fn with_checker(store: &'s S, checker: Box<dyn CredentialChecker>) -> Self {
        Self { store, checker }
    }

    /// Verifies a login/password pair and opens a session on success.
    ///
    /// Login lookup is exact and case-sensitive. On success the full
    /// user record is persisted under `current-session`.
    pub fn authenticate(&self, login: &str, password: &str) -> RepoResult<AuthOutcome> {
        let users = UserRepository::new(self.store);
        match users.find_by_login(login)? {
            Some(user) if self.checker.verify(&user, password) => {
                let raw = serde_json::to_string(&user)?;
                self.store.write(SESSION_KEY, &raw)?;
                info!(
                    "event=session_open module=session status=ok user_id={}",
                    user.id
                );
                Ok(AuthOutcome::Authenticated(user))
            }
            _ => {
                info!("event=session_open module=session status=rejected login={login}");
                Ok(AuthOutcome::Rejected)
            }
        }
    }

    /// Reads the current session back, failing open on bad data.
    ///
    /// An absent or undecodable record means "no session"; decode
    /// failures are logged, never propagated.
    pub fn current_user(&self) -> RepoResult<Option<User>> {
        let Some(raw) = self.store.read(SESSION_KEY)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!("event=decode_failed module=session status=recovered key={SESSION_KEY} error={err}");
                Ok(None)
            }
        }
    }

    /// Clears the session record. Idempotent.
    pub fn end_session(&self) -> RepoResult<()> {
        self.store.remove(SESSION_KEY)?;
        info!("event=session_close module=session status=ok");
        Ok(())
    }
}
