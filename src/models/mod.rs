//
//  antarctica-cli
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Entity Models
//!
//! The three resource kinds served by Antarctica plus the login [`User`].
//!
//! | Entity | URL prefix | Parent |
//! |--------|------------|--------|
//! | [`File`] | `file` | [`PackageRef`] |
//! | [`Package`] | `pkg` | [`RepositoryRef`] |
//! | [`Repository`] | `repo` | none |
//!
//! ## Sentinel parents
//!
//! The server keeps placeholder records for "no repository" (id 1), the
//! catch-all "Default" repository (id 2) and the default package (id 1).
//! When a reply references one of those ids the parent hydrates into the
//! matching sentinel variant rather than a full record, and serializes back
//! to the placeholder record.
//!
//! ```rust
//! use antarctica_cli::models::{Package, RepositoryRef};
//!
//! let package: Package = serde_json::from_str(
//!     r#"{"id": 4, "name": "vim", "repository": {"id": 2, "name": "Default"}}"#,
//! ).unwrap();
//! assert_eq!(package.repository, RepositoryRef::DefaultRepository);
//! ```

pub(crate) mod codec;
mod file;
mod package;
mod repository;
mod user;

pub use file::*;
pub use package::*;
pub use repository::*;
pub use user::*;

/// Id of the "no repository" placeholder.
pub const NO_REPOSITORY_ID: i64 = 1;

/// Id of the catch-all "Default" repository.
pub const DEFAULT_REPOSITORY_ID: i64 = 2;

/// Id of the default package for loose files.
pub const DEFAULT_PACKAGE_ID: i64 = 1;
