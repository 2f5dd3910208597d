//
//  antarctica-cli
//  models/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Configuration files tracked by the service.
//!
//! A [`File`] is either a local record waiting to be uploaded (no `id`) or a
//! copy of a remote record. Directory paths are stored with the home
//! directory written as `~`, so the same record resolves correctly on every
//! machine the user syncs to.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::codec;
use super::PackageRef;
use crate::api::transport::{MultipartBody, RequestBody};

/// Name of the multipart field carrying the raw file content.
pub const UPLOAD_FIELD: &str = "upload";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    /// Parent directory, without a trailing `/`.
    #[serde(default, deserialize_with = "codec::trimmed_path::deserialize")]
    pub path: String,
    #[serde(default, with = "codec::base64_content")]
    pub content: Vec<u8>,
    #[serde(default)]
    pub checksum: String,
    #[serde(default = "codec::epoch", with = "codec::timestamp")]
    pub created: DateTime<Utc>,
    #[serde(default = "codec::epoch", with = "codec::timestamp")]
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub package: PackageRef,
}

impl File {
    /// Builds a local record from a file on disk.
    ///
    /// Reads the content, computes its SHA-256 checksum and takes the
    /// timestamps from the file's metadata. Platforms without a creation
    /// time fall back to the modification time.
    ///
    /// # Errors
    ///
    /// Any I/O error from resolving, reading or inspecting `path`.
    pub fn from_local(path: &Path, package: PackageRef) -> io::Result<Self> {
        let path = path.canonicalize()?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?
            .to_string();
        let dir = path.parent().unwrap_or_else(|| Path::new("/"));

        let content = std::fs::read(&path)?;
        let metadata = std::fs::metadata(&path)?;
        let modified: DateTime<Utc> = metadata.modified()?.into();
        let created = metadata.created().map(DateTime::<Utc>::from).unwrap_or(modified);

        Ok(Self {
            id: None,
            name,
            path: collapse_home(dir, home_dir().as_deref()),
            checksum: sha256_hex(&content),
            content,
            created,
            modified,
            package,
        })
    }

    /// The directory with `~` expanded to the home directory.
    pub fn absolute_path(&self) -> String {
        expand_home(&self.path, home_dir().as_deref())
    }

    /// The full path with `~` expanded.
    pub fn absolute_name(&self) -> String {
        expand_home(&self.relative_name(), home_dir().as_deref())
    }

    /// `path/name` as stored, with `~` left in place. Used as the file's
    /// display key.
    pub fn relative_name(&self) -> String {
        format!("{}/{}", self.path, self.name)
    }

    /// Whether the stored checksum matches the content.
    pub fn is_intact(&self) -> bool {
        self.checksum.is_empty() || self.checksum.eq_ignore_ascii_case(&sha256_hex(&self.content))
    }

    /// Multipart body used for both create and update.
    pub(crate) fn upload_body(&self) -> RequestBody {
        RequestBody::Multipart(
            MultipartBody::new()
                .text("path", self.path.clone())
                .text("created", self.created.timestamp().to_string())
                .text("modified", self.modified.timestamp().to_string())
                .text("package_id", self.package.id().to_string())
                .file(UPLOAD_FIELD, self.name.clone(), self.content.clone()),
        )
    }
}

fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

fn expand_home(path: &str, home: Option<&Path>) -> String {
    match home {
        Some(home) => path.replace('~', &home.to_string_lossy()),
        None => path.to_string(),
    }
}

fn collapse_home(dir: &Path, home: Option<&Path>) -> String {
    if let Some(rest) = home.and_then(|home| dir.strip_prefix(home).ok()) {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.to_string_lossy());
    }
    dir.to_string_lossy().into_owned()
}

pub(crate) fn sha256_hex(content: &[u8]) -> String {
    Sha256::digest(content)
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
