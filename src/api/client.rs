//
//  antarctica-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Antarctica Client
//!
//! The entry point to the service. A client owns one [`Transport`] (and
//! with it the TLS material), the server base address and a
//! [`SessionStore`]. Sections borrow the client and read the session on
//! every call.
//!
//! ## Features
//!
//! - Remote and local server presets
//! - Login that installs the returned session
//! - Typed sections for files, packages and repositories
//! - Session restore for callers that persisted a token

use tracing::debug;
use url::Url;

use super::common::{ApiError, Result};
use super::endpoint::Endpoint;
use super::section::{Files, Packages, Repositories, Section};
use super::transport::Transport;
use crate::auth::{login, Session, SessionStore};
use crate::config::{Config, TlsConfig, DEFAULT_SERVER_URL, LOCAL_SERVER_URL};
use crate::models::User;

/// Client for one Antarctica server.
///
/// # Example
///
/// ```rust,no_run
/// use antarctica_cli::api::AntarcticaClient;
///
/// # async fn example() -> antarctica_cli::api::Result<()> {
/// let client = AntarcticaClient::local()?;
/// let user = client.authorize("penguin", "fish").await?;
/// println!("logged in as {}", user.display_name);
///
/// for file in client.files().list_all().await? {
///     println!("{}", file.relative_name());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AntarcticaClient {
    transport: Transport,
    base_url: Url,
    session: SessionStore,
}

impl AntarcticaClient {
    /// A client for `base_url` with no TLS extras and no session.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidUrl`] unless `base_url` is an absolute http or
    /// https URL.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_tls(base_url, None)
    }

    /// A client for the public server.
    pub fn remote() -> Result<Self> {
        Self::new(DEFAULT_SERVER_URL)
    }

    /// A client for a development server on this machine.
    pub fn local() -> Result<Self> {
        Self::new(LOCAL_SERVER_URL)
    }

    /// A client for `base_url` whose requests all carry `tls`.
    pub fn with_tls(base_url: &str, tls: Option<&TlsConfig>) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(tls)?,
            base_url: parse_base_url(base_url)?,
            session: SessionStore::new(),
        })
    }

    /// A client for the server and TLS material named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let tls = (!config.tls.is_empty()).then_some(&config.tls);
        Self::with_tls(config.server.base_url(), tls)
    }

    /// Starts the client with a session restored from storage.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = SessionStore::with_session(session);
        self
    }

    /// The server base address, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Exchanges credentials for a user and makes its token the current
    /// session.
    ///
    /// # Errors
    ///
    /// - [`ApiError::WrongLogin`] when the server rejects the credentials
    /// - [`ApiError::MissingFields`] when the reply lacks part of the user
    /// - [`ApiError::NoResponse`] when the server could not be reached
    ///
    /// The previous session, if any, is kept on failure.
    pub async fn authorize(&self, login: &str, password: &str) -> Result<User> {
        let user = login::request_login(&self.transport, &self.base_url, login, password).await?;
        self.session.set(Session::from(&user)).await;
        Ok(user)
    }

    pub async fn set_session(&self, session: Session) {
        self.session.set(session).await;
    }

    pub async fn session(&self) -> Option<Session> {
        self.session.current().await
    }

    pub async fn logout(&self) {
        self.session.clear().await;
    }

    pub fn files(&self) -> Files<'_> {
        Section::new(self)
    }

    pub fn packages(&self) -> Packages<'_> {
        Section::new(self)
    }

    pub fn repositories(&self) -> Repositories<'_> {
        Section::new(self)
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    /// URL templates for the current session.
    pub(crate) async fn endpoint(&self) -> Result<Endpoint> {
        let session = self.session.current().await.ok_or(ApiError::NotAuthenticated)?;
        Ok(Endpoint::new(self.base_url.clone(), session))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(format!("{raw}: expected an http or https URL")));
    }
    debug!(url = %url, "Using server");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(AntarcticaClient::remote().unwrap().base_url(), DEFAULT_SERVER_URL);
        assert_eq!(AntarcticaClient::local().unwrap().base_url(), LOCAL_SERVER_URL);
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = AntarcticaClient::new("https://example.org/antarctica/").unwrap();
        assert_eq!(client.base_url(), "https://example.org/antarctica");
    }

    #[test]
    fn test_rejects_non_http_urls() {
        for raw in ["ftp://example.org", "not a url", "mailto:penguin@example.org"] {
            assert!(
                matches!(AntarcticaClient::new(raw), Err(ApiError::InvalidUrl(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_config_honours_local_flag() {
        let mut config = Config::default();
        config.server.local = true;
        let client = AntarcticaClient::from_config(&config).unwrap();
        assert_eq!(client.base_url(), LOCAL_SERVER_URL);
    }

    #[tokio::test]
    async fn test_sections_need_a_session() {
        let client = AntarcticaClient::local().unwrap();
        assert!(matches!(client.endpoint().await, Err(ApiError::NotAuthenticated)));
        assert!(matches!(
            client.repositories().list_all().await,
            Err(ApiError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_restored_session_is_used() {
        let client = AntarcticaClient::local()
            .unwrap()
            .with_session(Session::new(7, "abc"));
        assert_eq!(client.session().await, Some(Session::new(7, "abc")));

        client.logout().await;
        assert_eq!(client.session().await, None);
    }
}
