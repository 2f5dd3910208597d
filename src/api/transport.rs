//
//  antarctica-cli
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Transport Executor
//!
//! Issues exactly one HTTP request per call and hands back the raw JSON
//! document of the reply. The transport never interprets the reply: status
//! codes, `ok` flags and error objects are the [`Envelope`]'s business.
//!
//! ## Contract
//!
//! - One request per [`Transport::execute`], no retries, no timeout beyond
//!   what `reqwest` itself enforces
//! - Connection failures and non-JSON bodies both come back as
//!   [`serde_json::Value::Null`], which the envelope classifies as
//!   `NoResponse`
//! - The TLS material configured at construction is applied to every request
//!
//! [`Envelope`]: crate::api::common::Envelope

use std::fmt;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Certificate, Client, Identity, Method};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::api::common::{ApiError, Result};
use crate::config::TlsConfig;

/// Body of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body (GET, DELETE).
    #[default]
    Empty,
    /// `application/x-www-form-urlencoded` fields, sent in order.
    Form(Vec<(&'static str, String)>),
    /// `multipart/form-data` with text fields and one binary part.
    Multipart(MultipartBody),
}

impl RequestBody {
    /// Looks up a text field by name, in either a form or a multipart body.
    pub fn field(&self, name: &str) -> Option<&str> {
        let fields = match self {
            Self::Empty => return None,
            Self::Form(fields) => fields,
            Self::Multipart(multipart) => &multipart.fields,
        };
        fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Names of all text fields, in the order they are sent.
    pub fn field_names(&self) -> Vec<&'static str> {
        match self {
            Self::Empty => Vec::new(),
            Self::Form(fields) => fields.iter().map(|(key, _)| *key).collect(),
            Self::Multipart(multipart) => multipart.fields.iter().map(|(key, _)| *key).collect(),
        }
    }
}

/// A binary part of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: &'static str,
    pub file_name: String,
    pub mime: &'static str,
    pub content: Vec<u8>,
}

/// A multipart body kept in plain data until it is sent, so it can be
/// inspected and compared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    fields: Vec<(&'static str, String)>,
    file: Option<FilePart>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    /// Attaches the binary part. The content type is inferred from the file
    /// name's extension.
    pub fn file(mut self, field: &'static str, file_name: impl Into<String>, content: Vec<u8>) -> Self {
        let file_name = file_name.into();
        self.file = Some(FilePart {
            field,
            mime: mime_type_for_file(&file_name),
            file_name,
            content,
        });
        self
    }

    pub fn file_part(&self) -> Option<&FilePart> {
        self.file.as_ref()
    }

    fn into_form(self) -> reqwest::Result<Form> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        if let Some(file) = self.file {
            let part = Part::bytes(file.content)
                .file_name(file.file_name)
                .mime_str(file.mime)?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

/// A request URL together with a loggable rendering of it.
///
/// Authenticated URLs carry the access token as a path segment, so the
/// label replaces it before anything is written to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub url: Url,
    label: String,
}

impl Target {
    /// A URL with nothing secret in it.
    pub fn public(url: Url) -> Self {
        let label = url.to_string();
        Self { url, label }
    }

    /// A URL logged as `label` instead of itself.
    pub fn with_label(url: Url, label: impl Into<String>) -> Self {
        Self {
            url,
            label: label.into(),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Executes single HTTP round trips and returns the reply as JSON.
#[derive(Debug, Clone)]
pub struct Transport {
    http: Client,
}

impl Transport {
    /// Builds the underlying HTTP client, attaching the extra root
    /// certificate and client identity from `tls` when present.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] when a PEM file cannot be read and
    /// [`ApiError::Tls`] when its content is not valid.
    pub fn new(tls: Option<&TlsConfig>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("antarctica/{}", crate::VERSION));

        if let Some(tls) = tls {
            if let Some(path) = &tls.ca_cert {
                let certificate = Certificate::from_pem(&std::fs::read(path)?)
                    .map_err(|e| tls_error(path, e))?;
                builder = builder.add_root_certificate(certificate);
            }
            if let Some(path) = &tls.identity {
                let identity =
                    Identity::from_pem(&std::fs::read(path)?).map_err(|e| tls_error(path, e))?;
                builder = builder.identity(identity);
            }
        }

        Ok(Self {
            http: builder.build()?,
        })
    }

    /// Performs one request and returns the JSON document of the reply.
    ///
    /// Never fails: a transport error or an unparseable body yields
    /// [`Value::Null`].
    pub async fn execute(&self, method: Method, target: &Target, body: RequestBody) -> Value {
        debug!(method = %method, url = %target, "Executing request");

        let mut request = self.http.request(method, target.url.clone());
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Form(fields) => request.form(&fields),
            RequestBody::Multipart(multipart) => match multipart.into_form() {
                Ok(form) => request.multipart(form),
                Err(e) => {
                    warn!(error = %e, "Could not build multipart body");
                    return Value::Null;
                }
            },
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %target, error = %e, "Request failed");
                return Value::Null;
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(url = %target, error = %e, "Could not read response body");
                return Value::Null;
            }
        };
        debug!(status = %status, size = bytes.len(), "Received response");

        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    }
}

fn tls_error(path: &Path, error: reqwest::Error) -> ApiError {
    ApiError::Tls(format!("{}: {}", path.display(), error))
}

/// Content type for an uploaded file, by extension.
fn mime_type_for_file(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => "application/json",
        Some("toml") => "application/toml",
        Some("yaml") | Some("yml") => "application/yaml",
        Some("xml") => "application/xml",
        Some("sh") | Some("bash") | Some("zsh") => "application/x-sh",
        Some("txt") | Some("conf") | Some("cfg") | Some("ini") | Some("md") | Some("vim")
        | Some("lua") => "text/plain",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        _ => "application/octet-stream",
    }
}
