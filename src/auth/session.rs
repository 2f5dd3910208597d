//
//  antarctica-cli
//  auth/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Session State
//!
//! The authenticated user's id and access token, used to build every
//! authenticated URL. A [`SessionStore`] is owned by each client; clones of
//! the store share the same slot, so a login through one handle is visible
//! through all of them.
//!
//! ## Lifecycle
//!
//! - Empty until the first successful login
//! - Replaced as a whole by every later login ([`SessionStore::set`])
//! - Never partially updated; readers always see a complete session
//! - No expiry tracking: a stale token surfaces as `InvalidToken` on the
//!   next request

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::User;

/// Credentials for authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Numeric id of the logged-in user.
    pub user_id: i64,
    /// Access token issued by the login endpoint.
    pub access_token: String,
}

impl Session {
    pub fn new(user_id: i64, access_token: impl Into<String>) -> Self {
        Self {
            user_id,
            access_token: access_token.into(),
        }
    }
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.access_token.clone())
    }
}

/// Guarded slot holding the current [`Session`].
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionStore {
    /// An empty, unauthenticated store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out with `session`, e.g. one restored from disk.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }

    /// Replaces the whole session in a single write.
    pub async fn set(&self, session: Session) {
        *self.inner.write().await = Some(session);
    }

    /// The latest session, if any.
    pub async fn current(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    /// Forgets the session.
    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_starts_empty() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated().await);
        assert_eq!(store.current().await, None);
    }

    #[tokio::test]
    async fn test_set_replaces_whole_session() {
        let store = SessionStore::with_session(Session::new(1, "first"));
        store.set(Session::new(2, "second")).await;
        assert_eq!(store.current().await, Some(Session::new(2, "second")));
    }

    #[tokio::test]
    async fn test_clones_share_the_slot() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set(Session::new(7, "abc")).await;
        assert_eq!(other.current().await, Some(Session::new(7, "abc")));

        other.clear().await;
        assert!(!store.is_authenticated().await);
    }
}
