use anyhow::{bail, Result};
use clap::Subcommand;
use retool_api::types::{ObjectType, PermissionSubject};
use retool_api::Client;

use crate::output::{build_access_rows, build_object_rows, print_entities, print_json, print_rows, OutputFormat};

#[derive(Subcommand)]
pub enum PermissionsCommand {
    /// Show who can access a folder or app
    AccessList {
        /// Object type: app, folder, resource, resourceConfiguration
        object_type: String,
        object_id: String,
    },
    /// List the objects a group or user can access
    Objects {
        /// Group ID (mutually exclusive with --user)
        #[arg(long, conflicts_with = "user", required_unless_present = "user")]
        group: Option<i64>,
        /// User ID
        #[arg(long)]
        user: Option<String>,
        /// Object type: app, folder, resource, resourceConfiguration
        #[arg(long, default_value = "app")]
        object_type: String,
    },
}

pub async fn run(cmd: &PermissionsCommand, client: &Client, format: OutputFormat) -> Result<()> {
    match cmd {
        PermissionsCommand::AccessList {
            object_type,
            object_id,
        } => {
            let object_type: ObjectType = object_type.parse()?;
            let Some(list) = client.get_access_list(object_type, object_id).await? else {
                bail!("no access list for {} {}", object_type, object_id);
            };
            if format == OutputFormat::Json {
                print_json(&list);
                return Ok(());
            }
            print_rows(build_access_rows(&list), format)
        }
        PermissionsCommand::Objects {
            group,
            user,
            object_type,
        } => {
            let object_type: ObjectType = object_type.parse()?;
            let subject = match (group, user) {
                (Some(id), _) => PermissionSubject::group(*id),
                (None, Some(id)) => PermissionSubject::user(id),
                (None, None) => bail!("either --group or --user is required"),
            };
            let objects = client.list_object_permissions(&subject, object_type).await?;
            print_entities(&objects, format, build_object_rows)
        }
    }
}
