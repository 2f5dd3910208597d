//
//  antarctica-cli
//  api/common/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response envelope validation.
//!
//! Every reply from the service has the form
//!
//! ```json
//! {"ok": true, "error": {"code": 1, "text": "..."}, "<resource key>": ...}
//! ```
//!
//! where the resource key depends on the endpoint family (`files`, `pkg`,
//! `created_id`, `user`, ...). [`Envelope::parse`] turns such a reply into a
//! success flag plus an [`ErrorBody`], and refuses to report success when the
//! expected resource key is absent, even if the server said `ok: true`.

use std::fmt;

use serde_json::{Map, Value};
use tracing::warn;

use super::{ApiError, Result};

/// Error codes carried in the `error.code` field of a reply.
///
/// The two negative codes are produced locally: `NoResponse` when nothing
/// usable came back, `MissingFields` when the reply had the wrong shape.
/// Codes the client does not know are preserved in [`ErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok,
    NotFound,
    InvalidToken,
    FormParsingError,
    AlreadyExists,
    WrongLogin,
    NoResponse,
    MissingFields,
    Unknown(i64),
}

impl ErrorCode {
    /// Decodes a raw numeric code. Out-of-range values never fail.
    pub fn from_raw(code: i64) -> Self {
        match code {
            0 => Self::Ok,
            1 => Self::NotFound,
            2 => Self::InvalidToken,
            3 => Self::FormParsingError,
            4 => Self::AlreadyExists,
            5 => Self::WrongLogin,
            -1 => Self::NoResponse,
            -2 => Self::MissingFields,
            other => Self::Unknown(other),
        }
    }

    /// The numeric value as it appears on the wire.
    pub fn as_raw(&self) -> i64 {
        match self {
            Self::Ok => 0,
            Self::NotFound => 1,
            Self::InvalidToken => 2,
            Self::FormParsingError => 3,
            Self::AlreadyExists => 4,
            Self::WrongLogin => 5,
            Self::NoResponse => -1,
            Self::MissingFields => -2,
            Self::Unknown(other) => *other,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::NotFound => "NotFound",
            Self::InvalidToken => "InvalidToken",
            Self::FormParsingError => "FormParsingError",
            Self::AlreadyExists => "AlreadyExists",
            Self::WrongLogin => "WrongLogin",
            Self::NoResponse => "NoResponse",
            Self::MissingFields => "MissingFields",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.as_raw(), self.name())
    }
}

/// The `{code, text}` pair of a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub text: String,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    fn ok() -> Self {
        Self::new(ErrorCode::Ok, "")
    }

    fn missing_fields() -> Self {
        Self::new(ErrorCode::MissingFields, "response is missing expected fields")
    }

    fn from_json(error: &Map<String, Value>) -> Self {
        let code = error
            .get("code")
            .and_then(Value::as_i64)
            .map(ErrorCode::from_raw)
            .unwrap_or(ErrorCode::Ok);
        let text = error
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self { code, text }
    }
}

impl Default for ErrorBody {
    /// An empty reply: `NoResponse` with the text "got no response".
    fn default() -> Self {
        Self::new(ErrorCode::NoResponse, "got no response")
    }
}

/// A top-level key that a reply must contain, together with the JSON type
/// the value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKey {
    /// A list reply, e.g. `files`.
    Array(&'static str),
    /// A single-entity reply, e.g. `file` or `user`.
    Object(&'static str),
    /// A scalar id, e.g. `created_id`.
    Integer(&'static str),
}

/// Key carried by every successful create reply.
pub const CREATED_ID: ShapeKey = ShapeKey::Integer("created_id");

/// Key carried by every successful login reply.
pub const USER: ShapeKey = ShapeKey::Object("user");

impl ShapeKey {
    /// The JSON key name.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Array(key) | Self::Object(key) | Self::Integer(key) => key,
        }
    }

    fn is_present(&self, object: &Map<String, Value>) -> bool {
        match (self, object.get(self.key())) {
            (Self::Array(_), Some(value)) => value.is_array(),
            (Self::Object(_), Some(value)) => value.is_object(),
            (Self::Integer(_), Some(value)) => value.is_i64() || value.is_u64(),
            (_, None) => false,
        }
    }
}

/// A validated reply.
///
/// # Example
///
/// ```rust
/// use antarctica_cli::api::common::{Envelope, ErrorCode, ShapeKey};
/// use serde_json::json;
///
/// let files = [ShapeKey::Array("files")];
///
/// let envelope = Envelope::parse(&json!({"ok": true, "files": []}), &files);
/// assert!(envelope.ok);
/// assert_eq!(envelope.error.code, ErrorCode::Ok);
///
/// // A claimed success without the expected key is not a success.
/// let envelope = Envelope::parse(&json!({"ok": true}), &files);
/// assert!(!envelope.ok);
/// assert_eq!(envelope.error.code, ErrorCode::MissingFields);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub ok: bool,
    pub error: ErrorBody,
    reported: bool,
}

impl Envelope {
    /// Validates `reply` against the keys acceptable for the call site.
    ///
    /// The reply passes when any one of `shape` is present with the right type.
    /// An explicit `error` object is always decoded verbatim and takes
    /// precedence over the shape check. Anything that is not a JSON object is
    /// treated as no reply at all.
    pub fn parse(reply: &Value, shape: &[ShapeKey]) -> Self {
        let Some(object) = reply.as_object() else {
            return Self {
                ok: false,
                error: ErrorBody::default(),
                reported: false,
            };
        };

        let mut ok = object.get("ok").and_then(Value::as_bool).unwrap_or(false);
        let mut error = ErrorBody::default();
        let mut reported = false;

        if let Some(body) = object.get("error").and_then(Value::as_object) {
            error = ErrorBody::from_json(body);
            reported = true;
        } else if !shape.iter().any(|key| key.is_present(object)) {
            ok = false;
            error = ErrorBody::missing_fields();
        } else if ok {
            error = ErrorBody::ok();
        }

        Self {
            ok,
            error,
            reported,
        }
    }

    /// Whether the error came from an `error` object sent by the server,
    /// rather than being synthesized locally.
    pub fn is_server_reported(&self) -> bool {
        self.reported
    }

    /// Converts the envelope into a `Result`, logging the failure.
    pub fn into_result(self) -> Result<()> {
        if self.ok {
            return Ok(());
        }
        warn!(code = %self.error.code, text = %self.error.text, "API request failed");
        Err(ApiError::from(self.error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource_families() -> Vec<ShapeKey> {
        vec![
            ShapeKey::Array("files"),
            ShapeKey::Object("file"),
            ShapeKey::Array("pkgs"),
            ShapeKey::Object("pkg"),
            ShapeKey::Array("repos"),
            ShapeKey::Object("repo"),
        ]
    }

    #[test]
    fn test_claimed_success_without_key_is_missing_fields() {
        for key in resource_families() {
            let envelope = Envelope::parse(&json!({"ok": true}), &[key]);
            assert!(!envelope.ok, "{} should not pass", key.key());
            assert_eq!(envelope.error.code, ErrorCode::MissingFields);
            assert!(!envelope.is_server_reported());
        }
    }

    #[test]
    fn test_expected_key_resolves_to_ok() {
        for key in resource_families() {
            let value = match key {
                ShapeKey::Array(_) => json!([]),
                _ => json!({}),
            };
            let mut reply = json!({"ok": true});
            reply[key.key()] = value;

            let envelope = Envelope::parse(&reply, &[key]);
            assert!(envelope.ok);
            assert_eq!(envelope.error.code, ErrorCode::Ok);
        }
    }

    #[test]
    fn test_key_with_wrong_type_does_not_count() {
        let envelope = Envelope::parse(&json!({"ok": true, "files": {}}), &[ShapeKey::Array("files")]);
        assert_eq!(envelope.error.code, ErrorCode::MissingFields);

        let envelope = Envelope::parse(&json!({"ok": true, "created_id": "7"}), &[CREATED_ID]);
        assert_eq!(envelope.error.code, ErrorCode::MissingFields);
    }

    #[test]
    fn test_error_object_is_decoded_verbatim() {
        let reply = json!({"ok": false, "error": {"code": 2, "text": "token expired"}});
        let envelope = Envelope::parse(&reply, &[ShapeKey::Object("file")]);
        assert!(!envelope.ok);
        assert!(envelope.is_server_reported());
        assert_eq!(envelope.error, ErrorBody::new(ErrorCode::InvalidToken, "token expired"));
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let reply = json!({"ok": false, "error": {"code": 42, "text": "teapot"}});
        let envelope = Envelope::parse(&reply, &[USER]);
        assert_eq!(envelope.error.code, ErrorCode::Unknown(42));
        assert_eq!(envelope.error.code.as_raw(), 42);

        let err = envelope.into_result().unwrap_err();
        assert!(matches!(err, ApiError::Server { code: ErrorCode::Unknown(42), .. }));
    }

    #[test]
    fn test_non_object_is_no_response() {
        for reply in [Value::Null, json!([1, 2]), json!("ok")] {
            let envelope = Envelope::parse(&reply, &[CREATED_ID]);
            assert!(!envelope.ok);
            assert_eq!(envelope.error, ErrorBody::default());
            assert!(matches!(envelope.into_result(), Err(ApiError::NoResponse)));
        }
    }

    #[test]
    fn test_missing_ok_defaults_to_failure() {
        let envelope = Envelope::parse(&json!({"created_id": 3}), &[CREATED_ID]);
        assert!(!envelope.ok);
        assert_eq!(envelope.error.code, ErrorCode::NoResponse);
    }

    #[test]
    fn test_raw_codes_round_trip() {
        for raw in -2..=5 {
            assert_eq!(ErrorCode::from_raw(raw).as_raw(), raw);
        }
    }
}
