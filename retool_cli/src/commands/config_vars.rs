use anyhow::{bail, Result};
use clap::Subcommand;
use retool_api::Client;

use crate::output::{build_config_var_rows, print_entities, OutputFormat};

#[derive(Subcommand)]
pub enum ConfigVarsCommand {
    /// List configuration variables
    List,
    /// Get a configuration variable by ID
    Get { id: String },
    /// Delete a configuration variable and its values
    Delete { id: String },
}

pub async fn run(cmd: &ConfigVarsCommand, client: &Client, format: OutputFormat) -> Result<()> {
    match cmd {
        ConfigVarsCommand::List => {
            let vars = client.list_configuration_variables().await?;
            print_entities(&vars, format, build_config_var_rows)
        }
        ConfigVarsCommand::Get { id } => {
            let Some(var) = client.get_configuration_variable(id).await? else {
                bail!("configuration variable {} not found", id);
            };
            print_entities(&[var], format, build_config_var_rows)
        }
        ConfigVarsCommand::Delete { id } => {
            client.delete_configuration_variable(id).await?;
            tracing::info!("Deleted configuration variable {}", id);
            Ok(())
        }
    }
}
