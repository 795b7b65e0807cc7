mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "retool")]
#[command(about = "Inspect and manage a Retool organization through its REST API")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Get or list users
    Users(commands::users::UsersArgs),
    /// Permission groups
    #[command(subcommand)]
    Groups(commands::groups::GroupsCommand),
    /// Folders
    #[command(subcommand)]
    Folders(commands::folders::FoldersCommand),
    /// Child spaces
    #[command(subcommand)]
    Spaces(commands::spaces::SpacesCommand),
    /// Configuration variables
    #[command(subcommand)]
    ConfigVars(commands::config_vars::ConfigVarsCommand),
    /// Organization-level user attributes
    #[command(subcommand)]
    OrgAttributes(commands::org_attributes::OrgAttributesCommand),
    /// Access lists and object permissions
    #[command(subcommand)]
    Permissions(commands::permissions::PermissionsCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("retool=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = Settings::from_env()?.client()?;
    let format = cli.output;

    match &cli.command {
        Commands::Users(args) => commands::users::run(args, &client, format).await?,
        Commands::Groups(cmd) => commands::groups::run(cmd, &client, format).await?,
        Commands::Folders(cmd) => commands::folders::run(cmd, &client, format).await?,
        Commands::Spaces(cmd) => commands::spaces::run(cmd, &client, format).await?,
        Commands::ConfigVars(cmd) => commands::config_vars::run(cmd, &client, format).await?,
        Commands::OrgAttributes(cmd) => commands::org_attributes::run(cmd, &client, format).await?,
        Commands::Permissions(cmd) => commands::permissions::run(cmd, &client, format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resource_actions() {
        let cli = Cli::parse_from(["retool", "--output", "json", "groups", "get", "7"]);
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(
            cli.command,
            Commands::Groups(commands::groups::GroupsCommand::Get { id: 7 })
        ));

        let cli = Cli::parse_from(["retool", "config-vars", "list"]);
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::ConfigVars(_)));

        assert!(Cli::try_parse_from(["retool", "--output", "xml", "spaces", "list"]).is_err());
    }
}
