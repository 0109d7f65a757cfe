//! Client-side auth session over the local store.
//!
//! The session is the pair (token, user profile) under fixed keys. Both
//! halves are set and cleared together; a half-session reads as no session.

use depot_types::{Session, UserProfile};

use crate::storage::Store;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Handle to the stored session.
#[derive(Debug, Clone)]
pub struct AuthSession {
    store: Store,
}

impl AuthSession {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Opens the session over the default store under DEPOT_HOME.
    pub fn open_default() -> Self {
        Self::new(Store::open_default())
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, &token);
    }

    pub fn remove_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.store.get(USER_KEY)
    }

    pub fn set_user(&self, user: &UserProfile) {
        self.store.set(USER_KEY, user);
    }

    pub fn remove_user(&self) {
        self.store.remove(USER_KEY);
    }

    /// Returns the full session, or `None` unless both token and user are
    /// retrievable. A token without a profile (or vice versa) counts as
    /// logged out.
    pub fn session(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.user()?,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Stores both halves of a fresh session.
    pub fn login(&self, session: &Session) {
        self.set_token(&session.token);
        self.set_user(&session.user);
    }

    /// Unconditional local logout: clears both halves, never talks to the
    /// server. Idempotent.
    pub fn logout(&self) {
        self.remove_token();
        self.remove_user();
    }
}
