//
//  antarctica-cli
//  cli/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! File commands: list, inspect, download, upload and delete stored
//! configuration files.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::json;

use crate::api::Files;
use crate::models::{File, PackageRef};
use crate::output::OutputWriter;

use super::{authenticated_client, confirm_delete, GlobalOptions};

#[derive(Args, Debug)]
pub struct FileCommand {
    #[command(subcommand)]
    pub command: FileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FileSubcommand {
    /// List all files
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Show one file's metadata
    Get(IdArgs),

    /// Print or save a file's content
    Content(ContentArgs),

    /// Upload a local file as a new remote file
    Upload(UploadArgs),

    /// Replace a remote file with a local one
    Update(UpdateArgs),

    /// Delete a remote file
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Key the listing by path, keeping the last file for each path
    #[arg(long)]
    pub keyed: bool,
}

#[derive(Args, Debug)]
pub struct IdArgs {
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct ContentArgs {
    pub id: i64,

    /// Write the content here instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct UploadArgs {
    pub path: PathBuf,

    /// Package the file belongs to; the default package when omitted
    #[arg(long, short = 'p')]
    pub package: Option<i64>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    pub id: i64,

    pub path: PathBuf,

    #[arg(long, short = 'p')]
    pub package: Option<i64>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

fn package_ref(package: Option<i64>) -> PackageRef {
    package.map(PackageRef::from_id).unwrap_or_default()
}

fn read_local(path: &Path, package: Option<i64>) -> Result<File> {
    File::from_local(path, package_ref(package))
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Uploads `path` over remote file `id`. Without `package` the file stays in
/// the package it already belongs to.
async fn replace_from_local(
    files: &Files<'_>,
    id: i64,
    path: &Path,
    package: Option<i64>,
) -> Result<()> {
    let mut file = read_local(path, package)?;
    if package.is_none() {
        let remote = files
            .get(id)
            .await?
            .ok_or_else(|| anyhow!("File {id} not found"))?;
        file.package = remote.package;
    }
    file.id = Some(id);
    files.update(&file).await?;
    Ok(())
}

impl FileCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = authenticated_client(global)?;
        let files = client.files();
        let writer = OutputWriter::from_flag(global.json);

        match &self.command {
            FileSubcommand::List(args) if args.keyed => {
                let keyed = files.list_all_keyed().await?;
                if global.json {
                    writer.write_json(&keyed)?;
                } else {
                    writer.write_list(&keyed.into_values().collect::<Vec<_>>())?;
                }
            }
            FileSubcommand::List(_) => writer.write_list(&files.list_all().await?)?,
            FileSubcommand::Get(args) => match files.get(args.id).await? {
                Some(file) => writer.write(&file)?,
                None => bail!("File {} not found", args.id),
            },
            FileSubcommand::Content(args) => {
                let content = files.get_content(args.id).await?;
                match &args.output {
                    Some(path) => {
                        std::fs::write(path, &content)
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        writer.write_success(&format!(
                            "Saved file {} to {}",
                            args.id,
                            path.display()
                        ));
                    }
                    None => writer.write_bytes(&content)?,
                }
            }
            FileSubcommand::Upload(args) => {
                let file = read_local(&args.path, args.package)?;
                let id = files.create(&file).await?;
                if global.json {
                    writer.write_json(&json!({ "id": id, "name": file.relative_name() }))?;
                } else {
                    writer.write_success(&format!("Uploaded {} as file {}", file.relative_name(), id));
                }
            }
            FileSubcommand::Update(args) => {
                replace_from_local(&files, args.id, &args.path, args.package).await?;
                writer.write_success(&format!("Updated file {}", args.id));
            }
            FileSubcommand::Delete(args) => {
                if !confirm_delete(&format!("file {}", args.id), args.yes)? {
                    writer.write_info("Cancelled");
                    return Ok(());
                }
                files.remove(args.id).await?;
                writer.write_success(&format!("Deleted file {}", args.id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AntarcticaClient;
    use crate::auth::Session;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn local_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("init.vim");
        std::fs::write(&path, "set number\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_update_keeps_remote_package() {
        let dir = tempfile::tempdir().unwrap();
        let path = local_file(&dir);

        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/user/7/file/5/abc")
            .with_body(
                json!({
                    "ok": true,
                    "file": {"id": 5, "name": "init.vim", "path": "~/.config/nvim", "package": {"id": 3, "name": "nvim"}}
                })
                .to_string(),
            )
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/api/user/7/file/5/abc")
            .match_body(Matcher::Regex(r#"name="package_id"\r\n\r\n3\r\n"#.into()))
            .with_body(r#"{"ok":true,"file":{"id":5}}"#)
            .create_async()
            .await;

        let client = AntarcticaClient::new(&server.url())
            .unwrap()
            .with_session(Session::new(7, "abc"));
        replace_from_local(&client.files(), 5, &path, None).await.unwrap();

        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_with_package_skips_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let path = local_file(&dir);

        let mut server = Server::new_async().await;
        let get = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let put = server
            .mock("PUT", "/api/user/7/file/5/abc")
            .match_body(Matcher::Regex(r#"name="package_id"\r\n\r\n4\r\n"#.into()))
            .with_body(r#"{"ok":true,"file":{"id":5}}"#)
            .create_async()
            .await;

        let client = AntarcticaClient::new(&server.url())
            .unwrap()
            .with_session(Session::new(7, "abc"));
        replace_from_local(&client.files(), 5, &path, Some(4)).await.unwrap();

        get.assert_async().await;
        put.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_of_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = local_file(&dir);

        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/user/7/file/9/abc")
            .with_body(r#"{"ok":false,"error":{"code":1,"text":"no such file"}}"#)
            .create_async()
            .await;
        let put = server
            .mock("PUT", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = AntarcticaClient::new(&server.url())
            .unwrap()
            .with_session(Session::new(7, "abc"));
        let error = replace_from_local(&client.files(), 9, &path, None)
            .await
            .unwrap_err();

        assert!(error.to_string().contains("not found"));
        put.assert_async().await;
    }
}
