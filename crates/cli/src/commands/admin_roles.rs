//! Admin roles command implementation.
//!
//! Responsibilities:
//! - List admin roles filtered by name and type
//! - Fetch, update and delete an admin role identified by name or GUID
//! - Add users to and remove users from an admin role
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Selector, required-field and empty-update checks run before any request
//! - Names are resolved to GUIDs by exact match

use anyhow::Result;
use clap::Subcommand;
use roles_client::{AdminRoleType, AdminRoleUpdate, AdminRoles, ClientError, ListFilter};
use roles_config::Config;
use tracing::info;

use crate::commands::{
    RoleSelector, build_client_from_config, parse_bool_flag, print_result, require_user_guids,
    split_list,
};
use crate::formatters::{OutputFormat, format_role, format_roles};

#[derive(Debug, Subcommand)]
pub enum AdminRolesCommand {
    /// List admin roles
    View {
        /// Name filter (substring match; `-` and values containing `%` are sent as-is)
        #[arg(long)]
        name: Option<String>,

        /// Role type: 1/global, 2/individual, 3/group-scoped
        #[arg(long = "type", value_name = "TYPE")]
        role_type: Option<AdminRoleType>,
    },
    /// Show one admin role
    Get {
        #[command(flatten)]
        selector: RoleSelector,
    },
    /// Update an admin role
    Update {
        #[command(flatten)]
        selector: RoleSelector,

        /// New role name
        #[arg(long)]
        update_name: Option<String>,

        /// Note
        #[arg(long)]
        note: Option<String>,

        /// User groups (comma-separated)
        #[arg(long)]
        user_groups: Option<String>,

        /// Device groups (comma-separated)
        #[arg(long)]
        device_groups: Option<String>,

        /// Whether the role also covers unassigned devices (true/false)
        #[arg(long, value_parser = parse_bool_flag)]
        unassigned: Option<bool>,
    },
    /// Delete an admin role
    Delete {
        #[command(flatten)]
        selector: RoleSelector,
    },
    /// Add users to an admin role
    AddUsers {
        #[command(flatten)]
        selector: RoleSelector,

        /// User GUIDs (comma-separated)
        #[arg(long)]
        user_guids: Option<String>,
    },
    /// Remove users from an admin role
    RemoveUsers {
        #[command(flatten)]
        selector: RoleSelector,

        /// User GUIDs (comma-separated)
        #[arg(long)]
        user_guids: Option<String>,
    },
}

pub async fn run(config: Config, command: AdminRolesCommand, output: OutputFormat) -> Result<()> {
    match command {
        AdminRolesCommand::View { name, role_type } => {
            run_view(&config, name, role_type, output).await
        }
        AdminRolesCommand::Get { selector } => run_get(&config, &selector, output).await,
        AdminRolesCommand::Update {
            selector,
            update_name,
            note,
            user_groups,
            device_groups,
            unassigned,
        } => {
            let params = AdminRoleUpdate {
                name: update_name,
                note,
                user_groups: split_list(user_groups.as_deref()),
                device_groups: split_list(device_groups.as_deref()),
                unassigned,
            };
            run_update(&config, &selector, params).await
        }
        AdminRolesCommand::Delete { selector } => run_delete(&config, &selector).await,
        AdminRolesCommand::AddUsers {
            selector,
            user_guids,
        } => run_add_users(&config, &selector, user_guids.as_deref()).await,
        AdminRolesCommand::RemoveUsers {
            selector,
            user_guids,
        } => run_remove_users(&config, &selector, user_guids.as_deref()).await,
    }
}

async fn run_view(
    config: &Config,
    name: Option<String>,
    role_type: Option<AdminRoleType>,
    output: OutputFormat,
) -> Result<()> {
    info!("Listing admin roles");

    let client = build_client_from_config(config)?;
    let filter = ListFilter {
        name,
        status: role_type.map(|t| t.code().to_string()),
    };
    let roles = client.list_roles::<AdminRoles>(&filter).await?;

    println!("{}", format_roles::<AdminRoles>(output, &roles)?);
    Ok(())
}

async fn run_get(config: &Config, selector: &RoleSelector, output: OutputFormat) -> Result<()> {
    let target = selector.target("get")?;

    let client = build_client_from_config(config)?;
    info!(target = ?target, "Fetching admin role");
    let outcome = target.fetch::<AdminRoles>(&client).await?;

    println!("{}", format_role::<AdminRoles>(output, &outcome)?);
    Ok(())
}

async fn run_update(config: &Config, selector: &RoleSelector, params: AdminRoleUpdate) -> Result<()> {
    let target = selector.target("update")?;
    if params.is_empty() {
        return Err(ClientError::NothingToUpdate.into());
    }

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<AdminRoles>(&client).await?;
    info!(guid = %guid, "Updating admin role");
    let outcome = client.update_admin_role(&guid, &params).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_delete(config: &Config, selector: &RoleSelector) -> Result<()> {
    let target = selector.target("delete")?;

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<AdminRoles>(&client).await?;
    info!(guid = %guid, "Deleting admin role");
    let outcome = client.delete_roles::<AdminRoles>(guid).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_add_users(
    config: &Config,
    selector: &RoleSelector,
    user_guids: Option<&str>,
) -> Result<()> {
    let target = selector.target("add-users")?;
    let users = require_user_guids(user_guids, "add-users")?;

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<AdminRoles>(&client).await?;
    info!(guid = %guid, count = users.len(), "Adding users to admin role");
    let outcome = client.add_admin_role_users(&guid, users).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_remove_users(
    config: &Config,
    selector: &RoleSelector,
    user_guids: Option<&str>,
) -> Result<()> {
    let target = selector.target("remove-users")?;
    let users = require_user_guids(user_guids, "remove-users")?;

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<AdminRoles>(&client).await?;
    info!(guid = %guid, count = users.len(), "Removing users from admin role");
    let outcome = client.remove_admin_role_users(&guid, users).await?;

    print_result(&outcome);
    Ok(())
}
