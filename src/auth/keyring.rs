//
//  antarctica-cli
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Token Storage
//!
//! Persists access tokens in the platform keyring (Keychain, Secret Service,
//! Credential Manager) so the CLI can restore a [`Session`] between runs.
//! Only the token is secret; the user id lives in the config file.
//!
//! ## Storage Model
//!
//! - **Service**: `antarctica-cli`
//! - **Key**: `<server base url>#<user id>`
//! - **Value**: the access token
//!
//! ## Example
//!
//! ```rust,no_run
//! use antarctica_cli::auth::{KeyringStore, Session};
//!
//! fn remember(session: &Session) -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!     store.save_session("https://antarctica-server.tk", session)?;
//!
//!     let restored = store.load_session("https://antarctica-server.tk", session.user_id)?;
//!     assert_eq!(restored.as_ref(), Some(session));
//!     Ok(())
//! }
//! ```
//!
//! [`Session`]: super::Session

use anyhow::Result;
use keyring::Entry;

use super::Session;

/// Service name grouping every entry written by this application.
const SERVICE_NAME: &str = "antarctica-cli";

/// Keyring entry name for one user on one server.
pub fn session_key(base_url: &str, user_id: i64) -> String {
    format!("{}#{}", base_url.trim_end_matches('/'), user_id)
}

/// Access-token storage backed by the system keyring.
///
/// No keyring access happens at construction; each call opens its own entry.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Stores `secret` under `key`, replacing any previous value.
    pub fn store(&self, key: &str, secret: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key)?;
        entry.set_password(secret)?;
        Ok(())
    }

    /// Reads the value under `key`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when no entry exists; `Err` only for keyring failures.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, key)?;
        match entry.get_password() {
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the value under `key`. Deleting a missing entry succeeds.
    pub fn delete(&self, key: &str) -> Result<()> {
        let entry = Entry::new(&self.service, key)?;
        match entry.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Persists the token of `session` for the server at `base_url`.
    pub fn save_session(&self, base_url: &str, session: &Session) -> Result<()> {
        self.store(&session_key(base_url, session.user_id), &session.access_token)
    }

    /// Rebuilds the session of `user_id` on `base_url`, if a token is stored.
    pub fn load_session(&self, base_url: &str, user_id: i64) -> Result<Option<Session>> {
        Ok(self
            .get(&session_key(base_url, user_id))?
            .map(|token| Session::new(user_id, token)))
    }

    /// Forgets the token of `user_id` on `base_url`.
    pub fn delete_session(&self, base_url: &str, user_id: i64) -> Result<()> {
        self.delete(&session_key(base_url, user_id))
    }
}
