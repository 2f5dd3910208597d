//
//  antarctica-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Antarctica service
//!
//! This module provides the types shared by every section of the API: the
//! error taxonomy returned by all operations and the response envelope that
//! validates raw JSON replies before any entity is hydrated from them.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorCode`] - Numeric error codes reported by the server
//! - [`Envelope`] - Validated `{ok, error}` wrapper around a JSON reply
//! - [`ShapeKey`] - A top-level key a reply must carry to count as complete
//!
//! # Example
//!
//! ```rust
//! use antarctica_cli::api::common::{ApiError, ErrorCode};
//!
//! fn describe(result: Result<(), ApiError>) -> String {
//!     match result {
//!         Ok(()) => "done".to_string(),
//!         Err(ApiError::WrongLogin) => "check your credentials".to_string(),
//!         Err(e) if e.code() == Some(ErrorCode::NotFound) => "no such entity".to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//!
//! assert_eq!(describe(Err(ApiError::WrongLogin)), "check your credentials");
//! ```

use thiserror::Error;

mod envelope;

pub use envelope::*;

/// Unified error type for all Antarctica API operations.
///
/// Server-side failures keep the numeric [`ErrorCode`] reported in the reply
/// so callers can branch on it; client-side failures (no session, unsaved
/// entity, undecodable payload) have their own variants.
///
/// # Variants
///
/// | Variant | Description | Code |
/// |---------|-------------|------|
/// | `NoResponse` | Transport failed or the body was not JSON | -1 |
/// | `MissingFields` | Reply lacks the keys expected for the call | -2 |
/// | `WrongLogin` | Login credentials were rejected | 5 |
/// | `Server` | Any other error reported by the server | as reported |
/// | `NotAuthenticated` | No session has been established yet | none |
/// | `Unsaved` | Entity has no id, so it cannot be addressed | none |
/// | `InvalidPayload` | Entity JSON could not be hydrated | none |
/// | `InvalidUrl` | Server base address is not an http(s) URL | none |
/// | `Tls` | TLS material could not be loaded | none |
/// | `Client` | The HTTP client could not be built | none |
/// | `Io` | Local file access failed | none |
#[derive(Error, Debug)]
pub enum ApiError {
    /// No reply at all: connection failure, or a body that is not a JSON document.
    #[error("No response from server")]
    NoResponse,

    /// The reply did not carry the resource key expected for the call,
    /// even if the server claimed success.
    #[error("Response is missing expected fields")]
    MissingFields,

    /// The login endpoint rejected the supplied credentials.
    #[error("Wrong login or password")]
    WrongLogin,

    /// An error reported by the server inside the response envelope.
    ///
    /// # Fields
    ///
    /// - `code` - The decoded error code (may be [`ErrorCode::Unknown`])
    /// - `text` - The server's message, verbatim
    #[error("Server error ({code}): {text}")]
    Server { code: ErrorCode, text: String },

    /// A section operation was issued before any session was established.
    #[error("Not logged in")]
    NotAuthenticated,

    /// An update was requested for an entity that was never created remotely.
    #[error("Entity has no id; create it first")]
    Unsaved,

    /// The reply passed validation but an entity could not be built from it.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The configured server address cannot serve as a base URL.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Certificate or identity material could not be parsed.
    #[error("Invalid TLS configuration: {0}")]
    Tls(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Reading local files (PEM material, uploads) failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Maps the error back onto the server's code taxonomy.
    ///
    /// Returns `None` for failures that never reached the server.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::NoResponse => Some(ErrorCode::NoResponse),
            Self::MissingFields => Some(ErrorCode::MissingFields),
            Self::WrongLogin => Some(ErrorCode::WrongLogin),
            Self::Server { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` when the server reported that the entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.code() == Some(ErrorCode::NotFound)
    }
}

impl From<ErrorBody> for ApiError {
    fn from(body: ErrorBody) -> Self {
        match body.code {
            ErrorCode::NoResponse => Self::NoResponse,
            ErrorCode::MissingFields => Self::MissingFields,
            ErrorCode::WrongLogin => Self::WrongLogin,
            code => Self::Server {
                code,
                text: body.text,
            },
        }
    }
}

/// Result type for Antarctica API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_maps_to_variants() {
        let err: ApiError = ErrorBody::new(ErrorCode::MissingFields, "").into();
        assert!(matches!(err, ApiError::MissingFields));

        let err: ApiError = ErrorBody::new(ErrorCode::NotFound, "no such file").into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Server error (1 NotFound): no such file");
    }

    #[test]
    fn test_client_side_errors_have_no_code() {
        assert_eq!(ApiError::NotAuthenticated.code(), None);
        assert_eq!(ApiError::Unsaved.code(), None);
        assert_eq!(ApiError::WrongLogin.code(), Some(ErrorCode::WrongLogin));
    }
}
