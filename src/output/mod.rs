//
//  antarctica-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders command results either as human-readable tables or as JSON for
//! scripting (`--json`).
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: table or JSON
//! - [`OutputWriter`]: writes values, lists and status messages in the
//!   selected format
//! - [`TableOutput`]: implemented by every entity the CLI prints
//!
//! ## Example
//!
//! ```rust,ignore
//! use antarctica_cli::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&repositories)?;
//! writer.write_success("Repository deleted");
//! ```

mod table;

pub use table::*;

use std::io::Write;

use console::style;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Picks JSON when `json` is set, tables otherwise.
    pub fn from_flag(json: bool) -> Self {
        Self::new(if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        })
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(values)?),
            OutputFormat::Table if values.is_empty() => self.write_info("Nothing to show"),
            OutputFormat::Table => T::print_list(values, self.color),
        }
        Ok(())
    }

    /// Writes raw bytes to stdout unchanged.
    pub fn write_bytes(&self, bytes: &[u8]) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        Ok(())
    }

    /// Writes an arbitrary serializable value, used for JSON-only replies
    /// such as created ids.
    pub fn write_json<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn write_warning(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Human-readable rendering of one entity, and of a list of them.
pub trait TableOutput: Sized {
    fn print_table(&self, color: bool);

    fn print_list(items: &[Self], color: bool) {
        for item in items {
            item.print_table(color);
            println!();
        }
    }
}

pub fn print_field(key: &str, value: &str, color: bool) {
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}
