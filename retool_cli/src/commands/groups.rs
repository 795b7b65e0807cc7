use anyhow::{bail, Result};
use clap::Subcommand;
use retool_api::types::GroupID;
use retool_api::Client;

use crate::output::{build_group_rows, print_entities, OutputFormat};

#[derive(Subcommand)]
pub enum GroupsCommand {
    /// List all groups
    List,
    /// Get a group by ID
    Get { id: GroupID },
    /// Delete a group
    Delete { id: GroupID },
    /// Remove a user from a group
    RemoveMember { group_id: GroupID, user_id: String },
}

pub async fn run(cmd: &GroupsCommand, client: &Client, format: OutputFormat) -> Result<()> {
    match cmd {
        GroupsCommand::List => {
            let groups = client.list_groups().await?;
            print_entities(&groups, format, build_group_rows)
        }
        GroupsCommand::Get { id } => {
            let Some(group) = client.get_group(*id).await? else {
                bail!("group {} not found", id);
            };
            print_entities(&[group], format, build_group_rows)
        }
        GroupsCommand::Delete { id } => {
            client.delete_group(*id).await?;
            tracing::info!("Deleted group {}", id);
            Ok(())
        }
        GroupsCommand::RemoveMember { group_id, user_id } => {
            client.remove_user_from_group(*group_id, user_id).await?;
            tracing::info!("Removed {} from group {}", user_id, group_id);
            Ok(())
        }
    }
}
