use anyhow::Result;
use chrono::{DateTime, Utc};
use retool_api::types::{
    AccessList, ConfigurationVariable, Folder, Group, OrganizationAttribute, Space, Subject, User,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct UserRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    user_type: String,
    #[tabled(rename = "Active")]
    #[serde(rename = "Active")]
    active: bool,
    #[tabled(rename = "Admin")]
    #[serde(rename = "Admin")]
    admin: bool,
    #[tabled(rename = "Last Active")]
    #[serde(rename = "Last Active")]
    last_active: String,
}

#[derive(Tabled, Serialize)]
pub struct GroupRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Members")]
    #[serde(rename = "Members")]
    members: usize,
    #[tabled(rename = "Apps")]
    #[serde(rename = "Apps")]
    app_access: String,
    #[tabled(rename = "Resources")]
    #[serde(rename = "Resources")]
    resource_access: String,
    #[tabled(rename = "Workflows")]
    #[serde(rename = "Workflows")]
    workflow_access: String,
}

#[derive(Tabled, Serialize)]
pub struct FolderRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    folder_type: String,
    #[tabled(rename = "Parent")]
    #[serde(rename = "Parent")]
    parent: String,
    #[tabled(rename = "System")]
    #[serde(rename = "System")]
    system: bool,
}

#[derive(Tabled, Serialize)]
pub struct SpaceRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Domain")]
    #[serde(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Created")]
    #[serde(rename = "Created")]
    created: String,
}

#[derive(Tabled, Serialize)]
pub struct ConfigVarRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Secret")]
    #[serde(rename = "Secret")]
    secret: bool,
    #[tabled(rename = "Environments")]
    #[serde(rename = "Environments")]
    environments: String,
}

#[derive(Tabled, Serialize)]
pub struct AttributeRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
    #[tabled(rename = "Data Type")]
    #[serde(rename = "Data Type")]
    data_type: String,
    #[tabled(rename = "Default")]
    #[serde(rename = "Default")]
    default_value: String,
}

#[derive(Tabled, Serialize)]
pub struct AccessRow {
    #[tabled(rename = "Subject")]
    #[serde(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Kind")]
    #[serde(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Access")]
    #[serde(rename = "Access")]
    access_level: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
}

#[derive(Tabled, Serialize)]
pub struct ObjectRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    kind: String,
    #[tabled(rename = "Access")]
    #[serde(rename = "Access")]
    access_level: String,
}

// -- Row builders --

pub fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id.clone(),
            name: u.display_name(),
            email: u.email.clone(),
            user_type: display_or_dash(u.user_type),
            active: u.active,
            admin: u.is_admin,
            last_active: format_time(u.last_active),
        })
        .collect()
}

pub fn build_group_rows(groups: &[Group]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|g| GroupRow {
            id: display_or_dash(g.id),
            name: g.name.clone(),
            members: g.members.len(),
            app_access: display_or_dash(g.universal_app_access),
            resource_access: display_or_dash(g.universal_resource_access),
            workflow_access: display_or_dash(g.universal_workflow_access),
        })
        .collect()
}

pub fn build_folder_rows(folders: &[Folder]) -> Vec<FolderRow> {
    folders
        .iter()
        .map(|f| FolderRow {
            id: f.id.clone(),
            name: f.name.clone(),
            folder_type: display_or_dash(f.folder_type),
            parent: f.parent_folder_id.clone().unwrap_or_else(|| "-".to_string()),
            system: f.is_system_folder,
        })
        .collect()
}

pub fn build_space_rows(spaces: &[Space]) -> Vec<SpaceRow> {
    spaces
        .iter()
        .map(|s| SpaceRow {
            id: s.id.clone(),
            name: s.name.clone(),
            domain: s.domain.clone(),
            created: format_time(s.created_at),
        })
        .collect()
}

/// Secret values are never printed, only the environments they are set in.
pub fn build_config_var_rows(vars: &[ConfigurationVariable]) -> Vec<ConfigVarRow> {
    vars.iter()
        .map(|v| ConfigVarRow {
            id: v.id.clone(),
            name: v.name.clone(),
            secret: v.secret,
            environments: v
                .values
                .iter()
                .map(|value| value.environment_id.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

pub fn build_attribute_rows(attributes: &[OrganizationAttribute]) -> Vec<AttributeRow> {
    attributes
        .iter()
        .map(|a| AttributeRow {
            id: a.id.clone(),
            name: a.name.clone(),
            label: a.label.clone().unwrap_or_default(),
            data_type: a.data_type.clone().unwrap_or_default(),
            default_value: a.default_value.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn build_access_rows(list: &AccessList) -> Vec<AccessRow> {
    list.group
        .iter()
        .chain(&list.user)
        .chain(&list.user_invite)
        .map(|entry| {
            let source = if entry.sources.direct {
                "direct".to_string()
            } else if entry.sources.universal {
                "universal".to_string()
            } else if let Some(parent) = &entry.sources.inherited {
                format!("inherited from {}", parent.id)
            } else {
                entry
                    .sources
                    .groups
                    .iter()
                    .map(|g| format!("group {}", g.id))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            AccessRow {
                subject: entry.subject.id.clone(),
                kind: entry.subject.kind.clone(),
                access_level: entry.access_level.to_string(),
                source,
            }
        })
        .collect()
}

pub fn build_object_rows(objects: &[Subject]) -> Vec<ObjectRow> {
    objects
        .iter()
        .map(|o| ObjectRow {
            id: o.id.clone(),
            kind: o.kind.clone(),
            access_level: display_or_dash(o.access_level),
        })
        .collect()
}

// -- Printing --

pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// Prints entities as JSON, or as rows built by `build` for every other format.
pub fn print_entities<T, R, F>(items: &[T], format: OutputFormat, build: F) -> Result<()>
where
    T: Serialize,
    R: Tabled + Serialize,
    F: FnOnce(&[T]) -> Vec<R>,
{
    if format == OutputFormat::Json {
        print_json(&items);
        return Ok(());
    }
    print_rows(build(items), format)
}

fn display_or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| "never".to_string(), |t| t.format("%Y-%m-%d %H:%M").to_string())
}
