//
//  antarctica-cli
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::models::Repository;
use crate::output::OutputWriter;

use super::{authenticated_client, confirm_delete, GlobalOptions};

#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// List all repositories
    #[command(visible_alias = "ls")]
    List,

    /// Show one repository
    Get { id: i64 },

    /// Register a repository
    Create {
        name: String,

        /// Base URL of the repository
        #[arg(long)]
        url: String,

        /// Package manager serving it, e.g. apt or brew
        #[arg(long)]
        manager: String,
    },

    /// Change a repository's name, URL or manager
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        manager: Option<String>,
    },

    /// Delete a repository
    #[command(visible_alias = "rm")]
    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = authenticated_client(global)?;
        let repositories = client.repositories();
        let writer = OutputWriter::from_flag(global.json);

        match &self.command {
            RepoSubcommand::List => writer.write_list(&repositories.list_all().await?)?,
            RepoSubcommand::Get { id } => {
                let repository = repositories
                    .get(*id)
                    .await?
                    .ok_or_else(|| anyhow!("Repository {id} not found"))?;
                writer.write(&repository)?;
            }
            RepoSubcommand::Create { name, url, manager } => {
                let repository = Repository::new(name.clone(), url.clone(), manager.clone());
                let id = repositories.create(&repository).await?;
                if global.json {
                    writer.write_json(&json!({ "id": id }))?;
                } else {
                    writer.write_success(&format!("Created repository {name} with id {id}"));
                }
            }
            RepoSubcommand::Update {
                id,
                name,
                url,
                manager,
            } => {
                let mut repository = repositories
                    .get(*id)
                    .await?
                    .ok_or_else(|| anyhow!("Repository {id} not found"))?;
                if let Some(name) = name {
                    repository.name = name.clone();
                }
                if let Some(url) = url {
                    repository.url = url.clone();
                }
                if let Some(manager) = manager {
                    repository.manager = manager.clone();
                }
                repositories.update(&repository).await?;
                writer.write_success(&format!("Updated repository {id}"));
            }
            RepoSubcommand::Delete { id, yes } => {
                if !confirm_delete(&format!("repository {id}"), *yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                repositories.remove(*id).await?;
                writer.write_success(&format!("Deleted repository {id}"));
            }
        }
        Ok(())
    }
}
