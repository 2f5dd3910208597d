//
//  antarctica-cli
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Builds terminal tables with `comfy_table`, plus the table renderings of
//! the entity models.
//!
//! ## Example
//!
//! ```rust,ignore
//! use antarctica_cli::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["ID", "Name", "Manager"])
//!     .row(["3", "core", "apt"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use console::style;

use super::{print_field, TableOutput};
use crate::models::{File, Package, Repository};
use crate::util::{format_size, format_time, truncate};

pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for a table with an optional coloured header.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            self.table
                .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn id_cell(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

impl TableOutput for File {
    fn print_table(&self, color: bool) {
        print_field("ID", &id_cell(self.id), color);
        print_field("Name", &self.relative_name(), color);
        print_field("Package", &self.package.id().to_string(), color);
        print_field("Size", &format_size(self.content.len() as u64), color);
        print_field("Checksum", &self.checksum, color);
        print_field("Created", &format_time(&self.created), color);
        print_field("Modified", &format_time(&self.modified), color);
        if !self.is_intact() {
            let warning = "content does not match checksum";
            if color {
                println!("{}", style(warning).yellow());
            } else {
                println!("{warning}");
            }
        }
    }

    fn print_list(items: &[Self], color: bool) {
        let mut table = TableBuilder::new()
            .color(color)
            .headers(["ID", "File", "Package", "Modified"]);
        for file in items {
            table = table.row([
                id_cell(file.id),
                file.relative_name(),
                file.package.id().to_string(),
                format_time(&file.modified),
            ]);
        }
        table.print();
    }
}

impl TableOutput for Package {
    fn print_table(&self, color: bool) {
        print_field("ID", &id_cell(self.id), color);
        print_field("Name", &self.name, color);
        print_field(
            "Repository",
            &format!("{} ({})", self.repository.name(), self.repository.id()),
            color,
        );
    }

    fn print_list(items: &[Self], color: bool) {
        let mut table = TableBuilder::new()
            .color(color)
            .headers(["ID", "Name", "Repository"]);
        for package in items {
            table = table.row([
                id_cell(package.id),
                package.name.clone(),
                package.repository.id().to_string(),
            ]);
        }
        table.print();
    }
}

impl TableOutput for Repository {
    fn print_table(&self, color: bool) {
        print_field("ID", &id_cell(self.id), color);
        print_field("Name", &self.name, color);
        print_field("URL", &self.url, color);
        print_field("Manager", &self.manager, color);
    }

    fn print_list(items: &[Self], color: bool) {
        let mut table = TableBuilder::new()
            .color(color)
            .headers(["ID", "Name", "URL", "Manager"]);
        for repository in items {
            table = table.row([
                id_cell(repository.id),
                repository.name.clone(),
                truncate(&repository.url, 48),
                repository.manager.clone(),
            ]);
        }
        table.print();
    }
}
