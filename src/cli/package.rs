//
//  antarctica-cli
//  cli/package.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Package commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::models::{Package, RepositoryRef};
use crate::output::OutputWriter;

use super::{authenticated_client, confirm_delete, GlobalOptions};

#[derive(Args, Debug)]
pub struct PackageCommand {
    #[command(subcommand)]
    pub command: PackageSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PackageSubcommand {
    /// List all packages
    #[command(visible_alias = "ls")]
    List,

    /// Show one package
    Get { id: i64 },

    /// Create a package
    Create {
        name: String,

        /// Repository id; none when omitted
        #[arg(long)]
        repo: Option<i64>,
    },

    /// Rename a package or move it to another repository
    Update {
        id: i64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        repo: Option<i64>,
    },

    /// Delete a package
    #[command(visible_alias = "rm")]
    Delete {
        id: i64,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the files that belong to a package
    Configs { id: i64 },
}

impl PackageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = authenticated_client(global)?;
        let packages = client.packages();
        let writer = OutputWriter::from_flag(global.json);

        match &self.command {
            PackageSubcommand::List => writer.write_list(&packages.list_all().await?)?,
            PackageSubcommand::Get { id } => {
                let package = packages
                    .get(*id)
                    .await?
                    .ok_or_else(|| anyhow!("Package {id} not found"))?;
                writer.write(&package)?;
            }
            PackageSubcommand::Create { name, repo } => {
                let repository = repo.map(RepositoryRef::from_id).unwrap_or_default();
                let id = packages.create(&Package::new(name.clone(), repository)).await?;
                if global.json {
                    writer.write_json(&json!({ "id": id }))?;
                } else {
                    writer.write_success(&format!("Created package {name} with id {id}"));
                }
            }
            PackageSubcommand::Update { id, name, repo } => {
                let mut package = packages
                    .get(*id)
                    .await?
                    .ok_or_else(|| anyhow!("Package {id} not found"))?;
                if let Some(name) = name {
                    package.name = name.clone();
                }
                if let Some(repo) = repo {
                    package.repository = RepositoryRef::from_id(*repo);
                }
                packages.update(&package).await?;
                writer.write_success(&format!("Updated package {id}"));
            }
            PackageSubcommand::Delete { id, yes } => {
                if !confirm_delete(&format!("package {id}"), *yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                packages.remove(*id).await?;
                writer.write_success(&format!("Deleted package {id}"));
            }
            PackageSubcommand::Configs { id } => {
                writer.write_list(&packages.get_configs(*id).await?)?
            }
        }
        Ok(())
    }
}
