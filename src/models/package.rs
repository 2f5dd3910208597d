//
//  antarctica-cli
//  models/package.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

use super::{RepositoryRef, DEFAULT_PACKAGE_ID};
use crate::api::transport::RequestBody;

/// A named group of configuration files, optionally published in a
/// repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub repository: RepositoryRef,
}

impl Package {
    /// A package that has not been created remotely yet.
    pub fn new(name: impl Into<String>, repository: RepositoryRef) -> Self {
        Self {
            id: None,
            name: name.into(),
            repository,
        }
    }

    /// The record the server keeps for the default package (id 1).
    pub fn default_package() -> Self {
        Self {
            id: Some(DEFAULT_PACKAGE_ID),
            ..Self::default()
        }
    }

    pub(crate) fn create_form(&self) -> RequestBody {
        RequestBody::Form(vec![
            ("id", self.id.unwrap_or_default().to_string()),
            ("name", self.name.clone()),
            ("repo_id", self.repository.id().to_string()),
        ])
    }

    pub(crate) fn update_form(&self) -> RequestBody {
        RequestBody::Form(vec![
            ("name", self.name.clone()),
            ("repo_id", self.repository.id().to_string()),
        ])
    }
}

/// The package a file belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Package>", into = "Option<Package>")]
pub enum PackageRef {
    /// The catch-all package for loose user files (id 1).
    #[default]
    DefaultPackage,
    Package(Package),
}

impl PackageRef {
    /// The id sent as `package_id` in file uploads.
    pub fn id(&self) -> i64 {
        match self {
            Self::DefaultPackage => DEFAULT_PACKAGE_ID,
            Self::Package(package) => package.id.unwrap_or_default(),
        }
    }

    /// A reference by id alone, as given on a command line.
    pub fn from_id(id: i64) -> Self {
        Self::from(Some(Package {
            id: Some(id),
            ..Package::default()
        }))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::DefaultPackage => "",
            Self::Package(package) => &package.name,
        }
    }
}

impl From<Option<Package>> for PackageRef {
    fn from(package: Option<Package>) -> Self {
        match package {
            Some(package) if !matches!(package.id, None | Some(DEFAULT_PACKAGE_ID)) => {
                Self::Package(package)
            }
            _ => Self::DefaultPackage,
        }
    }
}

impl From<PackageRef> for Option<Package> {
    fn from(reference: PackageRef) -> Self {
        Some(match reference {
            PackageRef::DefaultPackage => Package::default_package(),
            PackageRef::Package(package) => package,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hydrate_with_nested_repository() {
        let package: Package = serde_json::from_value(json!({
            "id": 4,
            "name": "vim",
            "repository": {"id": 9, "name": "core", "url": "https://example.org", "manager": "apt"}
        }))
        .unwrap();
        assert_eq!(package.id, Some(4));
        assert_eq!(package.repository.id(), 9);
    }

    #[test]
    fn test_missing_repository_is_no_repository() {
        let package: Package = serde_json::from_value(json!({"id": 4, "name": "vim"})).unwrap();
        assert_eq!(package.repository, RepositoryRef::NoRepository);
        assert_eq!(package.create_form().field("repo_id"), Some("1"));
    }

    #[test]
    fn test_default_package_sentinel() {
        let parent: PackageRef = serde_json::from_value(json!({"id": 1, "name": ""})).unwrap();
        assert_eq!(parent, PackageRef::DefaultPackage);
        assert_eq!(PackageRef::from_id(3).id(), 3);
    }

    #[test]
    fn test_form_bodies() {
        let package = Package::new("zsh", RepositoryRef::DefaultRepository);
        let create = package.create_form();
        assert_eq!(create.field_names(), vec!["id", "name", "repo_id"]);
        assert_eq!(create.field("repo_id"), Some("2"));

        let update = package.update_form();
        assert_eq!(update.field_names(), vec!["name", "repo_id"]);
    }

    #[test]
    fn test_hydrated_package_bodies_carry_its_fields() {
        let package: Package = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "nvim",
            "repository": {"id": 4, "name": "core", "url": "https://example.org", "manager": "apt"}
        }))
        .unwrap();

        let create = package.create_form();
        assert_eq!(create.field("id"), Some("3"));
        assert_eq!(create.field("name"), Some("nvim"));
        assert_eq!(create.field("repo_id"), Some("4"));

        let update = package.update_form();
        assert_eq!(update.field("name"), Some("nvim"));
        assert_eq!(update.field("repo_id"), Some("4"));
    }
}
