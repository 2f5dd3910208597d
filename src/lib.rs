//
//  antarctica-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Antarctica CLI Library
//!
//! Client library and command-line interface for the Antarctica service, a
//! server that stores configuration files grouped into packages, which in
//! turn belong to package-manager repositories.
//!
//! ## Overview
//!
//! [`AntarcticaClient`](api::AntarcticaClient) logs in once, keeps the
//! returned session, and hands out one typed CRUD section per entity kind:
//!
//! - [`Files`](api::Files): stored files, with their content base64 encoded
//!   on the wire
//! - [`Packages`](api::Packages): named groups of files
//! - [`Repositories`](api::Repositories): package-manager sources
//!
//! Every server reply is a JSON envelope with an `ok` flag; failures surface
//! as [`ApiError`](api::ApiError).
//!
//! ## Module Structure
//!
//! - [`api`]: transport, response envelope, endpoints and CRUD sections
//! - [`auth`]: login flow, session state and keyring storage
//! - [`models`]: File, Package, Repository and User records
//! - [`config`]: configuration file management
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: table and JSON rendering
//! - [`interactive`]: terminal prompts
//! - [`util`]: formatting helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use antarctica_cli::api::AntarcticaClient;
//!
//! # async fn demo() -> antarctica_cli::api::Result<()> {
//! let client = AntarcticaClient::local()?;
//! client.authorize("penguin", "secret").await?;
//!
//! for repository in client.repositories().list_all().await? {
//!     println!("{} {}", repository.name, repository.url);
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// HTTP client for the Antarctica server.
///
/// Handles the response envelope, endpoint construction, TLS setup and the
/// generic CRUD section shared by files, packages and repositories.
pub mod api;

/// Login flow, in-memory session and keyring-backed token storage.
pub mod auth;

/// Configuration file management.
///
/// Stored in platform-specific locations:
/// - Linux: `~/.config/antarctica/config.toml`
/// - macOS: `~/Library/Application Support/antarctica/config.toml`
/// - Windows: `%APPDATA%\antarctica\config\config.toml`
pub mod config;

/// Entity records exchanged with the server.
pub mod models;

/// Output formatting for tables and JSON.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Formatting helpers.
pub mod util;

/// Re-export of the main CLI struct for convenient access.
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use antarctica_cli::Cli;
///
/// let cli = Cli::parse();
/// // Handle cli.command...
/// ```
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Name of the CLI binary, used for completions and messages.
pub const APP_NAME: &str = "antarctica";

/// Application version constant.
///
/// ```rust
/// use antarctica_cli::VERSION;
///
/// println!("antarctica version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
pub mod exit_codes {
    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid arguments or options.
    pub const USAGE: i32 = 2;

    /// Not logged in, the server rejected the credentials, or the stored
    /// token is no longer valid.
    ///
    /// Run `antarctica login` to authenticate.
    pub const AUTH_ERROR: i32 = 4;

    /// The server reported that the entity does not exist.
    pub const NOT_FOUND: i32 = 8;
}
