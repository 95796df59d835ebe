//! User account repository.
//!
//! # Responsibility
//! - Own the `users` collection and the login-uniqueness invariant.
//!
//! # Invariants
//! - `add` rejects a draft whose login is already taken (case-sensitive
//!   comparison, same as authentication).
//! - `save_all` replaces the collection verbatim; bulk edits made by the
//!   admin dashboard flow through it.

use crate::model::prefixed_id;
use crate::model::user::{Role, User};
use crate::repo::{load_collection, store_collection, RepoError, RepoResult, USERS_KEY};
use crate::store::Store;
use log::info;

/// Input for creating a new account; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub login: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub residence_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Repository for the `users` collection.
pub struct UserRepository<'s, S: Store> {
    store: &'s S,
}

impl<'s, S: Store> UserRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    /// Returns every account in insertion order.
    pub fn get_all(&self) -> RepoResult<Vec<User>> {
        load_collection(self.store, USERS_KEY)
    }

    /// Replaces the whole collection.
    pub fn save_all(&self, users: &[User]) -> RepoResult<()> {
        store_collection(self.store, USERS_KEY, users)
    }

    /// Appends a new account, assigning its id.
    ///
    /// # Errors
    /// - `RepoError::DuplicateLogin` when the login is already taken.
    pub fn add(&self, draft: UserDraft) -> RepoResult<User> {
        let mut users = self.get_all()?;
        if users.iter().any(|user| user.login == draft.login) {
            return Err(RepoError::DuplicateLogin(draft.login));
        }

        let user = User {
            id: prefixed_id("user"),
            login: draft.login,
            password: draft.password,
            role: draft.role,
            name: draft.name,
            residence_number: draft.residence_number,
            email: draft.email,
            phone: draft.phone,
        };
        users.push(user.clone());
        self.save_all(&users)?;

        info!(
            "event=user_added module=repo status=ok id={} role={:?}",
            user.id, user.role
        );
        Ok(user)
    }

    /// Finds an account by exact, case-sensitive login.
    pub fn find_by_login(&self, login: &str) -> RepoResult<Option<User>> {
        let users = self.get_all()?;
        Ok(users.into_iter().find(|user| user.login == login))
    }
}
