//
//  antarctica-cli
//  models/codec.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Serde helpers for the wire formats the service uses inside entities.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serializer};
use serde_json::Value;

/// Base64 text on the wire, raw bytes in memory. `null` and absent decode
/// to no bytes.
pub mod base64_content {
    use super::*;

    pub fn serialize<S: Serializer>(content: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(content))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        STANDARD
            .decode(encoded.trim())
            .map_err(|e| D::Error::custom(format!("content is not valid base64: {e}")))
    }
}

/// Timestamps as RFC 3339, naive ISO 8601 (taken as UTC) or epoch seconds.
/// Always written back as RFC 3339.
pub mod timestamp {
    use super::*;

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(DateTime::UNIX_EPOCH),
            Value::Number(n) => n
                .as_i64()
                .and_then(|secs| DateTime::from_timestamp(secs, 0))
                .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {n}"))),
            Value::String(s) => parse(&s)
                .ok_or_else(|| D::Error::custom(format!("unrecognised timestamp: {s}"))),
            other => Err(D::Error::custom(format!("unexpected timestamp: {other}"))),
        }
    }

    pub(crate) fn parse(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(time) = DateTime::parse_from_rfc3339(text) {
            return Some(time.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|naive| naive.and_utc())
    }
}

/// Directory paths with the trailing `/` removed.
pub mod trimmed_path {
    use super::*;

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        let path = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
            _ => path,
        })
    }
}

pub fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}
