//
//  antarctica-cli
//  api/section.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Sections
//!
//! One generic CRUD client, [`Section`], shared by every resource kind.
//! The URL template, envelope check and hydration are written once; the only
//! per-kind pieces are the [`Resource`] implementations, which supply the URL
//! prefix, the display key and the create/update bodies.
//!
//! | Operation | Method | Path | Expected reply key |
//! |-----------|--------|------|--------------------|
//! | [`list_all`](Section::list_all) | GET | `{P}s` | `{P}s` array |
//! | [`get`](Section::get) | GET | `{P}/{id}` | `{P}` object |
//! | [`create`](Section::create) | POST | `{P}s` | `created_id` |
//! | [`update`](Section::update) | PUT | `{P}/{id}` | `{P}` or `{P}s` |
//! | [`remove`](Section::remove) | DELETE | `{P}/{id}` | `{P}` or `{P}s` |
//!
//! Each call is one round trip; nothing is retried or cached, and `create`
//! is not idempotent.
//!
//! ## Example
//!
//! ```rust,no_run
//! use antarctica_cli::api::AntarcticaClient;
//! use antarctica_cli::models::Repository;
//!
//! async fn publish(client: &AntarcticaClient) -> antarctica_cli::api::Result<()> {
//!     let id = client
//!         .repositories()
//!         .create(&Repository::new("core", "https://example.org", "apt"))
//!         .await?;
//!
//!     if let Some(repository) = client.repositories().get(id).await? {
//!         println!("created {}", repository.name);
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::client::AntarcticaClient;
use super::common::{ApiError, Envelope, Result, ShapeKey, CREATED_ID};
use super::transport::{RequestBody, Target};
use crate::models::{File, Package, Repository};

/// A resource kind the service exposes under its own URL prefix.
pub trait Resource: DeserializeOwned {
    /// Path token for single-entity URLs and the singular reply key.
    const PREFIX: &'static str;
    /// Path token for collection URLs and the plural reply key.
    const PLURAL: &'static str;

    /// Server-assigned id, `None` until created.
    fn id(&self) -> Option<i64>;

    /// Key under which [`Section::list_all_keyed`] files the entity.
    fn display_key(&self) -> String;

    fn create_body(&self) -> RequestBody;

    fn update_body(&self) -> RequestBody;

    fn from_json(value: &Value) -> Result<Self> {
        <Self as Deserialize>::deserialize(value).map_err(|e| ApiError::InvalidPayload(e.to_string()))
    }
}

impl Resource for File {
    const PREFIX: &'static str = "file";
    const PLURAL: &'static str = "files";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_key(&self) -> String {
        self.relative_name()
    }

    fn create_body(&self) -> RequestBody {
        self.upload_body()
    }

    fn update_body(&self) -> RequestBody {
        self.upload_body()
    }
}

impl Resource for Package {
    const PREFIX: &'static str = "pkg";
    const PLURAL: &'static str = "pkgs";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_key(&self) -> String {
        self.name.clone()
    }

    fn create_body(&self) -> RequestBody {
        self.create_form()
    }

    fn update_body(&self) -> RequestBody {
        self.update_form()
    }
}

impl Resource for Repository {
    const PREFIX: &'static str = "repo";
    const PLURAL: &'static str = "repos";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_key(&self) -> String {
        self.name.clone()
    }

    fn create_body(&self) -> RequestBody {
        self.create_form()
    }

    fn update_body(&self) -> RequestBody {
        self.update_form()
    }
}

/// CRUD operations for one resource kind, bound to a client's session.
pub struct Section<'a, E> {
    client: &'a AntarcticaClient,
    kind: PhantomData<fn() -> E>,
}

pub type Files<'a> = Section<'a, File>;
pub type Packages<'a> = Section<'a, Package>;
pub type Repositories<'a> = Section<'a, Repository>;

impl<'a, E: Resource> Section<'a, E> {
    pub(crate) fn new(client: &'a AntarcticaClient) -> Self {
        Self {
            client,
            kind: PhantomData,
        }
    }

    /// Runs one request and validates the reply against `shape`.
    async fn send(
        &self,
        method: Method,
        target: Target,
        body: RequestBody,
        shape: &[ShapeKey],
    ) -> Result<Value> {
        let reply = self.client.transport().execute(method, &target, body).await;
        Envelope::parse(&reply, shape).into_result()?;
        Ok(reply)
    }

    fn single_shapes() -> [ShapeKey; 2] {
        [ShapeKey::Object(E::PREFIX), ShapeKey::Array(E::PLURAL)]
    }

    /// Every entity of this kind, in server order.
    ///
    /// Array elements that are not objects or fail to hydrate are skipped
    /// with a warning; the rest of the list is still returned.
    pub async fn list_all(&self) -> Result<Vec<E>> {
        let endpoint = self.client.endpoint().await?;
        let reply = self
            .send(
                Method::GET,
                endpoint.collection(E::PREFIX),
                RequestBody::Empty,
                &[ShapeKey::Array(E::PLURAL)],
            )
            .await?;
        Ok(hydrate_all(&reply[E::PLURAL]))
    }

    /// Every entity of this kind, keyed by [`Resource::display_key`].
    ///
    /// When two entities share a key, the one later in the server's list
    /// replaces the earlier one.
    pub async fn list_all_keyed(&self) -> Result<BTreeMap<String, E>> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .map(|entity| (entity.display_key(), entity))
            .collect())
    }

    /// The entity with `id`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the server reports `NotFound`; every other failure
    /// is an error.
    pub async fn get(&self, id: i64) -> Result<Option<E>> {
        let endpoint = self.client.endpoint().await?;
        let reply = self
            .send(
                Method::GET,
                endpoint.item(E::PREFIX, id),
                RequestBody::Empty,
                &[ShapeKey::Object(E::PREFIX)],
            )
            .await;

        match reply {
            Ok(reply) => E::from_json(&reply[E::PREFIX]).map(Some),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Uploads a new entity and returns the id the server assigned to it.
    pub async fn create(&self, entity: &E) -> Result<i64> {
        let endpoint = self.client.endpoint().await?;
        let reply = self
            .send(
                Method::POST,
                endpoint.collection(E::PREFIX),
                entity.create_body(),
                &[CREATED_ID],
            )
            .await?;

        let id = reply[CREATED_ID.key()]
            .as_i64()
            .ok_or(ApiError::MissingFields)?;
        info!(kind = E::PREFIX, id, "Created");
        Ok(id)
    }

    /// Replaces the remote copy of `entity`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Unsaved`] when the entity has no id yet.
    pub async fn update(&self, entity: &E) -> Result<()> {
        let id = entity.id().ok_or(ApiError::Unsaved)?;
        let endpoint = self.client.endpoint().await?;
        self.send(
            Method::PUT,
            endpoint.item(E::PREFIX, id),
            entity.update_body(),
            &Self::single_shapes(),
        )
        .await?;
        info!(kind = E::PREFIX, id, "Updated");
        Ok(())
    }

    /// Deletes the entity with `id`.
    pub async fn remove(&self, id: i64) -> Result<()> {
        let endpoint = self.client.endpoint().await?;
        self.send(
            Method::DELETE,
            endpoint.item(E::PREFIX, id),
            RequestBody::Empty,
            &Self::single_shapes(),
        )
        .await?;
        info!(kind = E::PREFIX, id, "Deleted");
        Ok(())
    }
}

impl Section<'_, File> {
    /// The decoded content of file `id`.
    pub async fn get_content(&self, id: i64) -> Result<Vec<u8>> {
        let endpoint = self.client.endpoint().await?;
        let reply = self
            .send(
                Method::GET,
                endpoint.item_action(File::PREFIX, id, "content"),
                RequestBody::Empty,
                &[ShapeKey::Object(File::PREFIX)],
            )
            .await?;
        Ok(File::from_json(&reply[File::PREFIX])?.content)
    }
}

impl Section<'_, Package> {
    /// The configuration files that belong to package `id`.
    pub async fn get_configs(&self, id: i64) -> Result<Vec<File>> {
        let endpoint = self.client.endpoint().await?;
        let reply = self
            .send(
                Method::GET,
                endpoint.item_action(Package::PREFIX, id, "configs"),
                RequestBody::Empty,
                &[ShapeKey::Array(File::PLURAL)],
            )
            .await?;
        Ok(hydrate_all(&reply[File::PLURAL]))
    }
}

fn hydrate_all<E: Resource>(items: &Value) -> Vec<E> {
    items
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .filter(|item| item.is_object())
        .filter_map(|item| match E::from_json(item) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(kind = E::PREFIX, error = %e, "Skipping malformed entry");
                None
            }
        })
        .collect()
}
