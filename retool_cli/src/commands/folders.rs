use anyhow::{bail, Result};
use clap::Subcommand;
use retool_api::Client;

use crate::output::{build_folder_rows, print_entities, OutputFormat};

#[derive(Subcommand)]
pub enum FoldersCommand {
    /// List all folders
    List,
    /// Get a folder by ID
    Get { id: String },
    /// Delete a folder
    Delete { id: String },
}

pub async fn run(cmd: &FoldersCommand, client: &Client, format: OutputFormat) -> Result<()> {
    match cmd {
        FoldersCommand::List => {
            let folders = client.list_folders().await?;
            print_entities(&folders, format, build_folder_rows)
        }
        FoldersCommand::Get { id } => {
            let Some(folder) = client.get_folder(id).await? else {
                bail!("folder {} not found", id);
            };
            print_entities(&[folder], format, build_folder_rows)
        }
        FoldersCommand::Delete { id } => {
            client.delete_folder(id).await?;
            tracing::info!("Deleted folder {}", id);
            Ok(())
        }
    }
}
