//
//  antarctica-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod completion;
mod config;
mod file;
mod package;
mod repo;

pub use auth::{LoginCommand, LogoutCommand, StatusCommand};
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use file::FileCommand;
pub use package::PackageCommand;
pub use repo::RepoCommand;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};

use crate::api::AntarcticaClient;
use crate::auth::KeyringStore;
use crate::config::Config;
use crate::interactive::prompt::prompt_confirm;

#[derive(Parser, Debug)]
#[command(
    name = "antarctica",
    version,
    about = "Sync configuration files with an Antarctica server",
    long_about = "antarctica manages the files, packages and repositories stored on an \
                  Antarctica server.\n\n\
                  Log in once with 'antarctica login'; the token is kept in the system keyring.",
    propagate_version = true,
    after_help = "Use 'antarctica <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Server base URL, overriding the config file
    #[arg(long, global = true, env = "ANTARCTICA_SERVER")]
    pub server: Option<String>,

    /// Talk to a development server on 127.0.0.1:3000
    #[arg(long, global = true, conflicts_with = "server")]
    pub local: bool,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and remember the access token
    Login(LoginCommand),

    /// Forget the stored access token
    Logout(LogoutCommand),

    /// Show who is logged in
    Status(StatusCommand),

    /// Work with files
    #[command(visible_alias = "f")]
    File(FileCommand),

    /// Work with packages
    #[command(visible_alias = "package")]
    Pkg(PackageCommand),

    /// Work with repositories
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Read and change settings
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print the version
    Version,
}

/// The config file with the command-line server overrides applied.
pub(crate) fn resolve_config(global: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load()?;
    if let Some(url) = &global.server {
        config.server.url = url.clone();
        config.server.local = false;
    }
    if global.local {
        config.server.local = true;
    }
    Ok(config)
}

/// A client for the configured server with the stored session restored.
pub(crate) fn authenticated_client(global: &GlobalOptions) -> Result<AntarcticaClient> {
    let config = resolve_config(global)?;
    let client = AntarcticaClient::from_config(&config).context("Failed to set up client")?;

    let not_logged_in = || anyhow!("Not logged in. Run 'antarctica login' first.");
    let user_id = config.session.user_id.ok_or_else(not_logged_in)?;
    let session = KeyringStore::new()
        .load_session(client.base_url(), user_id)?
        .ok_or_else(not_logged_in)?;

    Ok(client.with_session(session))
}

/// Asks before deleting unless `yes` was passed.
pub(crate) fn confirm_delete(what: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    prompt_confirm(&format!("Delete {what}?"))
}
