use anyhow::Result;
use clap::Subcommand;
use retool_api::Client;

use crate::output::{build_attribute_rows, print_entities, OutputFormat};

#[derive(Subcommand)]
pub enum OrgAttributesCommand {
    /// List user attributes defined for the organization
    List,
    /// Delete an attribute from one user
    Unset { user_id: String, name: String },
}

pub async fn run(cmd: &OrgAttributesCommand, client: &Client, format: OutputFormat) -> Result<()> {
    match cmd {
        OrgAttributesCommand::List => {
            let attributes = client.list_organization_attributes().await?;
            print_entities(&attributes, format, build_attribute_rows)
        }
        OrgAttributesCommand::Unset { user_id, name } => {
            let remaining = client.delete_user_attribute(user_id, name).await?;
            tracing::info!("Removed attribute {} from {}", name, user_id);
            if format == OutputFormat::Json {
                crate::output::print_json(&remaining);
            }
            Ok(())
        }
    }
}
