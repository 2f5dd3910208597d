//
//  antarctica-cli
//  auth/login.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Flow
//!
//! Exchanges a login and password for a [`User`] carrying an access token.
//! The request goes through the same transport and envelope as every other
//! call, but to an endpoint that needs no session.
//!
//! ## Failure mapping
//!
//! | Reply | Error |
//! |-------|-------|
//! | error object with code `5` or any negative code | [`ApiError::WrongLogin`] |
//! | nothing / not JSON | [`ApiError::NoResponse`] |
//! | no `user` object, or a `user` missing `id`, `login`, `name` or `token` | [`ApiError::MissingFields`] |
//! | any other error object | [`ApiError::Server`] |

use reqwest::Method;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};
use url::Url;

use crate::api::common::{ApiError, Envelope, ErrorCode, Result, USER};
use crate::api::endpoint;
use crate::api::transport::{RequestBody, Transport};
use crate::models::User;

/// Whether a server-reported code means the credentials were rejected.
fn rejects_credentials(code: ErrorCode) -> bool {
    code == ErrorCode::WrongLogin || code.as_raw() < 0
}

fn check_user_fields(user_json: &Value) -> Result<()> {
    match User::REQUIRED_KEYS
        .iter()
        .find(|key| user_json.get(**key).is_none())
    {
        Some(missing) => {
            warn!(field = %missing, "Login reply is missing a user field");
            Err(ApiError::MissingFields)
        }
        None => Ok(()),
    }
}

/// Posts `{login, password}` to the login endpoint and hydrates the user.
///
/// Does not touch any session; the caller decides where the returned
/// credentials go.
pub async fn request_login(
    transport: &Transport,
    base: &Url,
    login: &str,
    password: &str,
) -> Result<User> {
    let body = RequestBody::Form(vec![
        ("login", login.to_string()),
        ("password", password.to_string()),
    ]);
    let reply = transport
        .execute(Method::POST, &endpoint::login(base), body)
        .await;

    let envelope = Envelope::parse(&reply, &[USER]);
    if !envelope.ok && envelope.is_server_reported() && rejects_credentials(envelope.error.code) {
        warn!(login = %login, text = %envelope.error.text, "Login rejected");
        return Err(ApiError::WrongLogin);
    }

    // an incomplete user is MissingFields whatever `ok` says
    let user_json = &reply[USER.key()];
    if !envelope.is_server_reported() && user_json.is_object() {
        check_user_fields(user_json)?;
    }
    envelope.into_result()?;

    let user = User::deserialize(user_json).map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
    info!(user_id = user.id, login = %user.login, "Login successful");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_credential_codes() {
        assert!(rejects_credentials(ErrorCode::WrongLogin));
        assert!(rejects_credentials(ErrorCode::NoResponse));
        assert!(rejects_credentials(ErrorCode::Unknown(-3)));
        assert!(!rejects_credentials(ErrorCode::NotFound));
        assert!(!rejects_credentials(ErrorCode::InvalidToken));
        assert!(!rejects_credentials(ErrorCode::Unknown(9)));
    }

    #[test]
    fn test_user_fields_must_all_be_present() {
        let complete = serde_json::json!({"id": 7, "login": "penguin", "name": "Penguin", "token": "abc"});
        assert!(check_user_fields(&complete).is_ok());

        let no_token = serde_json::json!({"id": 7, "login": "penguin", "name": "Penguin"});
        assert!(matches!(check_user_fields(&no_token), Err(ApiError::MissingFields)));
    }
}
