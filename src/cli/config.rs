//
//  antarctica-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and changes the server and TLS settings in the config file. The
//! session section is owned by `login`/`logout` and is not editable here.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde_json::json;

use crate::config::{Config, KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key, e.g. server.url
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// New value; an empty string clears optional paths
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => {
                if !KEYS.contains(&args.key.as_str()) {
                    bail!("Unknown config key '{}'. Valid keys: {}", args.key, KEYS.join(", "));
                }
                let value = Config::load()?.get(&args.key);
                if global.json {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({ "key": args.key, "value": value }))?
                    );
                } else if let Some(value) = value {
                    println!("{}", value);
                }
            }
            ConfigSubcommand::Set(args) => {
                let mut config = Config::load()?;
                config.set(&args.key, &args.value)?;
                config.save()?;
                println!(
                    "{} Set {} = {}",
                    style("✓").green(),
                    style(&args.key).cyan(),
                    args.value
                );
            }
            ConfigSubcommand::List => {
                let config = Config::load()?;
                if global.json {
                    let values: serde_json::Map<_, _> = KEYS
                        .iter()
                        .map(|key| (key.to_string(), json!(config.get(key))))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&values)?);
                } else {
                    for key in KEYS {
                        let value = config.get(key).unwrap_or_default();
                        println!("{} = {}", style(key).cyan(), value);
                    }
                }
            }
            ConfigSubcommand::Path => {
                println!("{}", Config::config_path()?.display());
            }
        }
        Ok(())
    }
}
