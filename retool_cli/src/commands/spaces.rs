use anyhow::{bail, Result};
use clap::Subcommand;
use retool_api::Client;

use crate::output::{build_space_rows, print_entities, OutputFormat};

#[derive(Subcommand)]
pub enum SpacesCommand {
    /// List child spaces
    List,
    /// Get a space by ID
    Get { id: String },
    /// Delete a space
    Delete { id: String },
}

pub async fn run(cmd: &SpacesCommand, client: &Client, format: OutputFormat) -> Result<()> {
    match cmd {
        SpacesCommand::List => {
            let spaces = client.list_spaces().await?;
            print_entities(&spaces, format, build_space_rows)
        }
        SpacesCommand::Get { id } => {
            let Some(space) = client.get_space(id).await? else {
                bail!("space {} not found", id);
            };
            print_entities(&[space], format, build_space_rows)
        }
        SpacesCommand::Delete { id } => {
            client.delete_space(id).await?;
            tracing::info!("Deleted space {}", id);
            Ok(())
        }
    }
}
