//
//  antarctica-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the Antarctica REST service.
//!
//! ## Architecture
//!
//! Leaf first:
//!
//! - [`transport`]: one HTTP round trip per call, raw JSON back
//! - [`common`]: the response envelope and the error taxonomy
//! - [`endpoint`]: URL templates built from the current session
//! - [`section`]: generic list/get/create/update/delete per resource kind
//! - [`client`]: [`AntarcticaClient`], which ties them together with the
//!   session and the login flow
//!
//! A call flows client → section → endpoint → transport → envelope →
//! entity model, and every failure comes back as an [`ApiError`].
//!
//! ## Error Handling
//!
//! Server-reported failures keep their numeric code:
//!
//! - `NotFound` (1): `get` turns it into `Ok(None)`, other operations fail
//! - `InvalidToken` (2): the session is stale, log in again
//! - `WrongLogin` (5): rejected credentials, only from login
//! - `NoResponse` (-1): nothing usable came back
//! - `MissingFields` (-2): the reply lacked the expected resource key

/// Client facade owning transport, base address and session.
pub mod client;

/// Envelope validation and the shared error type.
pub mod common;

pub mod endpoint;

/// Generic CRUD sections and the [`section::Resource`] trait.
pub mod section;

pub mod transport;

pub use client::AntarcticaClient;
pub use common::{ApiError, ErrorCode, Result};
pub use section::{Files, Packages, Repositories, Resource, Section};
