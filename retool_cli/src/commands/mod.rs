//! CLI subcommand implementations.

pub mod config_vars;
pub mod folders;
pub mod groups;
pub mod org_attributes;
pub mod permissions;
pub mod spaces;
pub mod users;
