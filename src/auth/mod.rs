//
//  antarctica-cli
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Login, session state and token persistence for the Antarctica service.
//!
//! ## Module Structure
//!
//! - [`login`]: exchanges credentials for a [`User`](crate::models::User)
//! - [`session`]: the [`Session`] value and its guarded [`SessionStore`]
//! - [`keyring`]: keeps access tokens in the system keyring between runs
//!
//! A client holds one [`SessionStore`]. Logging in through
//! [`AntarcticaClient::authorize`](crate::api::AntarcticaClient::authorize)
//! replaces its contents; every section operation reads it to build URLs.

mod keyring;
pub mod login;
mod session;

pub use keyring::*;
pub use session::*;
