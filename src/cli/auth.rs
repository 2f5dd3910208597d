//
//  antarctica-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Login, logout and status commands.
//!
//! A successful login stores the user id and login name in the config file
//! and the access token in the system keyring.

use anyhow::{Context, Result};
use clap::Args;
use console::style;
use serde_json::json;

use crate::api::{AntarcticaClient, ApiError};
use crate::auth::{KeyringStore, Session};
use crate::config::{Config, SessionConfig};
use crate::interactive::prompt::{prompt_input, prompt_password};
use crate::output::OutputWriter;

use super::{resolve_config, GlobalOptions};

/// Environment variable read instead of prompting for the password.
const PASSWORD_ENV: &str = "ANTARCTICA_PASSWORD";

#[derive(Args, Debug)]
pub struct LoginCommand {
    /// Login name; prompted for when omitted
    #[arg(long, short = 'l')]
    pub login: Option<String>,
}

#[derive(Args, Debug)]
pub struct LogoutCommand {}

#[derive(Args, Debug)]
pub struct StatusCommand {}

impl LoginCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = resolve_config(global)?;
        let client = AntarcticaClient::from_config(&config).context("Failed to set up client")?;

        let login = match &self.login {
            Some(login) => login.clone(),
            None => prompt_input("Login")?,
        };
        let password = match std::env::var(PASSWORD_ENV) {
            Ok(password) => password,
            Err(_) => prompt_password("Password")?,
        };

        let user = match client.authorize(&login, &password).await {
            Ok(user) => user,
            Err(e @ ApiError::WrongLogin) => return Err(e.into()),
            Err(e) => return Err(e).context("Login failed"),
        };

        KeyringStore::new().save_session(client.base_url(), &Session::from(&user))?;

        let mut stored = Config::load()?;
        stored.session = SessionConfig {
            user_id: Some(user.id),
            login: Some(user.login.clone()),
        };
        stored.save()?;

        let writer = OutputWriter::from_flag(global.json);
        if global.json {
            writer.write_json(&json!({
                "server": client.base_url(),
                "id": user.id,
                "login": user.login,
                "name": user.display_name,
            }))?;
        } else {
            writer.write_success(&format!(
                "Logged in to {} as {} ({})",
                client.base_url(),
                style(&user.login).cyan(),
                user.display_name
            ));
        }
        Ok(())
    }
}

impl LogoutCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = resolve_config(global)?;
        let writer = OutputWriter::from_flag(global.json);

        let Some(user_id) = config.session.user_id else {
            writer.write_info("Not logged in");
            return Ok(());
        };

        let client = AntarcticaClient::from_config(&config)?;
        KeyringStore::new().delete_session(client.base_url(), user_id)?;

        let mut stored = Config::load()?;
        stored.session = SessionConfig::default();
        stored.save()?;

        writer.write_success(&format!("Logged out of {}", client.base_url()));
        Ok(())
    }
}

impl StatusCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = resolve_config(global)?;
        let client = AntarcticaClient::from_config(&config)?;

        let session = match config.session.user_id {
            Some(user_id) => KeyringStore::new().load_session(client.base_url(), user_id)?,
            None => None,
        };
        let login = config.session.login.as_deref().unwrap_or("unknown");

        if global.json {
            let status = json!({
                "server": client.base_url(),
                "logged_in": session.is_some(),
                "user_id": session.as_ref().map(|s| s.user_id),
                "login": session.as_ref().map(|_| login),
            });
            println!("{}", serde_json::to_string_pretty(&status)?);
            return Ok(());
        }

        println!("{}", style(client.base_url()).bold());
        match session {
            Some(session) => println!(
                "  {} Logged in as {} (id {})",
                style("✓").green(),
                style(login).cyan(),
                session.user_id
            ),
            None => println!("  {} Not logged in", style("✗").red()),
        }
        Ok(())
    }
}
