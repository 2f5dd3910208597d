//
//  antarctica-cli
//  models/repository.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

use super::{DEFAULT_REPOSITORY_ID, NO_REPOSITORY_ID};
use crate::api::transport::RequestBody;

/// A package source: a base URL served by some package manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub url: String,
    pub manager: String,
}

impl Repository {
    /// A repository that has not been created remotely yet.
    pub fn new(name: impl Into<String>, url: impl Into<String>, manager: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            url: url.into(),
            manager: manager.into(),
        }
    }

    /// The record the server keeps for "no repository" (id 1).
    pub fn no_repository() -> Self {
        Self {
            id: Some(NO_REPOSITORY_ID),
            ..Self::default()
        }
    }

    /// The catch-all "Default" repository (id 2).
    pub fn default_repository() -> Self {
        Self {
            id: Some(DEFAULT_REPOSITORY_ID),
            name: "Default".to_string(),
            ..Self::default()
        }
    }

    pub(crate) fn create_form(&self) -> RequestBody {
        RequestBody::Form(vec![
            ("id", self.id.unwrap_or_default().to_string()),
            ("name", self.name.clone()),
            ("url", self.url.clone()),
            ("manager", self.manager.clone()),
        ])
    }

    pub(crate) fn update_form(&self) -> RequestBody {
        RequestBody::Form(vec![
            ("name", self.name.clone()),
            ("url", self.url.clone()),
            ("manager", self.manager.clone()),
        ])
    }
}

/// The repository a package belongs to.
///
/// The two sentinel records are separate variants, so there is no shared
/// placeholder object a caller could modify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Repository>", into = "Option<Repository>")]
pub enum RepositoryRef {
    /// The package is not published anywhere (id 1).
    #[default]
    NoRepository,
    /// The catch-all "Default" repository (id 2).
    DefaultRepository,
    Repository(Repository),
}

impl RepositoryRef {
    /// The id sent as `repo_id` in package forms.
    pub fn id(&self) -> i64 {
        match self {
            Self::NoRepository => NO_REPOSITORY_ID,
            Self::DefaultRepository => DEFAULT_REPOSITORY_ID,
            Self::Repository(repository) => repository.id.unwrap_or_default(),
        }
    }

    /// A reference by id alone, as given on a command line.
    pub fn from_id(id: i64) -> Self {
        Self::from(Some(Repository {
            id: Some(id),
            ..Repository::default()
        }))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::NoRepository => "",
            Self::DefaultRepository => "Default",
            Self::Repository(repository) => &repository.name,
        }
    }
}

impl From<Option<Repository>> for RepositoryRef {
    fn from(repository: Option<Repository>) -> Self {
        match repository {
            None => Self::NoRepository,
            Some(repository) => match repository.id {
                None | Some(NO_REPOSITORY_ID) => Self::NoRepository,
                Some(DEFAULT_REPOSITORY_ID) => Self::DefaultRepository,
                Some(_) => Self::Repository(repository),
            },
        }
    }
}

impl From<RepositoryRef> for Option<Repository> {
    fn from(reference: RepositoryRef) -> Self {
        Some(match reference {
            RepositoryRef::NoRepository => Repository::no_repository(),
            RepositoryRef::DefaultRepository => Repository::default_repository(),
            RepositoryRef::Repository(repository) => repository,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sentinel_ids_hydrate_into_variants() {
        let parent: RepositoryRef = serde_json::from_value(json!({"id": 1, "name": ""})).unwrap();
        assert_eq!(parent, RepositoryRef::NoRepository);

        let parent: RepositoryRef = serde_json::from_value(json!({"id": 2, "name": "Default"})).unwrap();
        assert_eq!(parent, RepositoryRef::DefaultRepository);

        let parent: RepositoryRef = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(parent, RepositoryRef::NoRepository);

        let parent: RepositoryRef = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parent, RepositoryRef::NoRepository);
    }

    #[test]
    fn test_real_repository_is_kept() {
        let parent: RepositoryRef = serde_json::from_value(json!({
            "id": 9, "name": "core", "url": "https://example.org", "manager": "apt"
        }))
        .unwrap();
        assert_eq!(parent.id(), 9);
        assert_eq!(parent.name(), "core");
    }

    #[test]
    fn test_sentinels_serialize_as_records() {
        let value = serde_json::to_value(RepositoryRef::DefaultRepository).unwrap();
        assert_eq!(value, json!({"id": 2, "name": "Default", "url": "", "manager": ""}));
    }

    #[test]
    fn test_from_id_maps_sentinels() {
        assert_eq!(RepositoryRef::from_id(1), RepositoryRef::NoRepository);
        assert_eq!(RepositoryRef::from_id(2), RepositoryRef::DefaultRepository);
        assert_eq!(RepositoryRef::from_id(5).id(), 5);
    }

    #[test]
    fn test_form_bodies() {
        let repository = Repository::new("core", "https://example.org", "apt");
        let create = repository.create_form();
        assert_eq!(create.field_names(), vec!["id", "name", "url", "manager"]);
        assert_eq!(create.field("id"), Some("0"));

        let update = repository.update_form();
        assert_eq!(update.field_names(), vec!["name", "url", "manager"]);
        assert_eq!(update.field("manager"), Some("apt"));
    }

    #[test]
    fn test_hydrated_repository_bodies_carry_its_fields() {
        let repository: Repository = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "core",
            "url": "https://example.org/core",
            "manager": "brew"
        }))
        .unwrap();

        let create = repository.create_form();
        assert_eq!(create.field("id"), Some("4"));
        assert_eq!(create.field("name"), Some("core"));
        assert_eq!(create.field("url"), Some("https://example.org/core"));
        assert_eq!(create.field("manager"), Some("brew"));

        let update = repository.update_form();
        assert_eq!(update.field("name"), Some("core"));
        assert_eq!(update.field("url"), Some("https://example.org/core"));
        assert_eq!(update.field("manager"), Some("brew"));
    }
}
