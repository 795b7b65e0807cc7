use anyhow::{bail, Result};
use clap::Args;
use retool_api::{Client, UserQuery};

use crate::output::{build_user_rows, print_entities, OutputFormat};

#[derive(Args)]
pub struct UsersArgs {
    /// Get a single user by ID
    #[arg(long)]
    pub id: Option<String>,

    /// Filter by email address
    #[arg(long)]
    pub email: Option<String>,

    /// Filter by first name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Filter by last name
    #[arg(long)]
    pub last_name: Option<String>,
}

pub async fn run(args: &UsersArgs, client: &Client, format: OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        let Some(user) = client.get_user(id).await? else {
            bail!("user {} not found", id);
        };
        return print_entities(&[user], format, build_user_rows);
    }

    let mut query = UserQuery::default();
    if let Some(email) = &args.email {
        query = query.with_email(email);
    }
    if let Some(first_name) = &args.first_name {
        query = query.with_first_name(first_name);
    }
    if let Some(last_name) = &args.last_name {
        query = query.with_last_name(last_name);
    }

    let users = client.list_users(&query).await?;
    tracing::info!("Found {} users", users.len());
    print_entities(&users, format, build_user_rows)
}
