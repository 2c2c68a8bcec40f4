//! Control roles command implementation.
//!
//! Responsibilities:
//! - List control roles filtered by name and status
//! - Create, fetch, update, delete, enable and disable control roles
//! - Assign users to a control role and remove users from control roles
//! - Read `--proto-file` payloads and base64-encode them
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Validating the permission payload, which is opaque to the client
//!
//! Invariants:
//! - Selector, required-field and empty-update checks run before any request
//! - `remove-users` is not scoped to a role and takes no selector

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};
use clap::Subcommand;
use roles_client::{
    ClientError, ControlRoleCreate, ControlRoleStatus, ControlRoleUpdate, ControlRoles,
    ListFilter,
};
use roles_config::Config;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::commands::{
    RoleSelector, build_client_from_config, print_result, require_user_guids,
};
use crate::error::UsageError;
use crate::formatters::{OutputFormat, format_role, format_roles};

#[derive(Debug, Subcommand)]
pub enum ControlRolesCommand {
    /// List control roles
    View {
        /// Name filter (substring match; `-` and values containing `%` are sent as-is)
        #[arg(long)]
        name: Option<String>,

        /// Status: 0/disabled or 1/enabled
        #[arg(long)]
        status: Option<ControlRoleStatus>,
    },
    /// Show one control role
    Get {
        #[command(flatten)]
        selector: RoleSelector,
    },
    /// Create a control role
    Add {
        /// Role name
        #[arg(long)]
        name: Option<String>,

        /// Note
        #[arg(long)]
        note: Option<String>,

        /// Base64-encoded permission payload
        #[arg(long, conflicts_with = "proto_file")]
        proto: Option<String>,

        /// File holding the raw permission payload; it is base64-encoded before sending
        #[arg(long, value_name = "FILE")]
        proto_file: Option<PathBuf>,
    },
    /// Update a control role
    Update {
        #[command(flatten)]
        selector: RoleSelector,

        /// New role name
        #[arg(long)]
        update_name: Option<String>,

        /// Note
        #[arg(long)]
        note: Option<String>,

        /// Base64-encoded permission payload
        #[arg(long, conflicts_with = "proto_file")]
        proto: Option<String>,

        /// File holding the raw permission payload; it is base64-encoded before sending
        #[arg(long, value_name = "FILE")]
        proto_file: Option<PathBuf>,
    },
    /// Delete a control role
    Delete {
        #[command(flatten)]
        selector: RoleSelector,
    },
    /// Enable a control role
    Enable {
        #[command(flatten)]
        selector: RoleSelector,
    },
    /// Disable a control role
    Disable {
        #[command(flatten)]
        selector: RoleSelector,
    },
    /// Assign users to a control role
    AssignUsers {
        #[command(flatten)]
        selector: RoleSelector,

        /// User GUIDs (comma-separated)
        #[arg(long)]
        user_guids: Option<String>,
    },
    /// Remove users from their control roles
    RemoveUsers {
        /// User GUIDs (comma-separated)
        #[arg(long)]
        user_guids: Option<String>,
    },
}

pub async fn run(
    config: Config,
    command: ControlRolesCommand,
    output: OutputFormat,
) -> Result<()> {
    match command {
        ControlRolesCommand::View { name, status } => {
            run_view(&config, name, status, output).await
        }
        ControlRolesCommand::Get { selector } => run_get(&config, &selector, output).await,
        ControlRolesCommand::Add {
            name,
            note,
            proto,
            proto_file,
        } => {
            let proto = read_proto(proto, proto_file.as_deref())?;
            run_add(&config, name, note, proto).await
        }
        ControlRolesCommand::Update {
            selector,
            update_name,
            note,
            proto,
            proto_file,
        } => {
            let proto = read_proto(proto, proto_file.as_deref())?;
            let params = ControlRoleUpdate::new(update_name, note, proto);
            run_update(&config, &selector, params).await
        }
        ControlRolesCommand::Delete { selector } => run_delete(&config, &selector).await,
        ControlRolesCommand::Enable { selector } => {
            run_set_enabled(&config, &selector, true).await
        }
        ControlRolesCommand::Disable { selector } => {
            run_set_enabled(&config, &selector, false).await
        }
        ControlRolesCommand::AssignUsers {
            selector,
            user_guids,
        } => run_assign_users(&config, &selector, user_guids.as_deref()).await,
        ControlRolesCommand::RemoveUsers { user_guids } => {
            run_remove_users(&config, user_guids.as_deref()).await
        }
    }
}

/// Pick the proto payload from `--proto` or the base64 encoding of `--proto-file`.
fn read_proto(proto: Option<String>, proto_file: Option<&Path>) -> Result<Option<String>> {
    match proto_file {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("Failed to read proto file {}", path.display()))?;
            Ok(Some(general_purpose::STANDARD.encode(bytes)))
        }
        None => Ok(proto),
    }
}

async fn run_view(
    config: &Config,
    name: Option<String>,
    status: Option<ControlRoleStatus>,
    output: OutputFormat,
) -> Result<()> {
    info!("Listing control roles");

    let client = build_client_from_config(config)?;
    let filter = ListFilter {
        name,
        status: status.map(|s| s.code().to_string()),
    };
    let roles = client.list_roles::<ControlRoles>(&filter).await?;

    println!("{}", format_roles::<ControlRoles>(output, &roles)?);
    Ok(())
}

async fn run_get(config: &Config, selector: &RoleSelector, output: OutputFormat) -> Result<()> {
    let target = selector.target("get")?;

    let client = build_client_from_config(config)?;
    info!(target = ?target, "Fetching control role");
    let outcome = target.fetch::<ControlRoles>(&client).await?;

    println!("{}", format_role::<ControlRoles>(output, &outcome)?);
    Ok(())
}

async fn run_add(
    config: &Config,
    name: Option<String>,
    note: Option<String>,
    proto: Option<String>,
) -> Result<()> {
    let name = name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| UsageError::new("--name is required for add command"))?;

    let client = build_client_from_config(config)?;
    info!(name = %name, "Adding control role");
    let params = ControlRoleCreate::new(name, note, proto);
    let outcome = client.create_control_role(&params).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_update(
    config: &Config,
    selector: &RoleSelector,
    params: ControlRoleUpdate,
) -> Result<()> {
    let target = selector.target("update")?;
    if params.is_empty() {
        return Err(ClientError::NothingToUpdate.into());
    }

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<ControlRoles>(&client).await?;
    info!(guid = %guid, "Updating control role");
    let outcome = client.update_control_role(&guid, &params).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_delete(config: &Config, selector: &RoleSelector) -> Result<()> {
    let target = selector.target("delete")?;

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<ControlRoles>(&client).await?;
    info!(guid = %guid, "Deleting control role");
    let outcome = client.delete_roles::<ControlRoles>(guid).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_set_enabled(config: &Config, selector: &RoleSelector, enabled: bool) -> Result<()> {
    let command = if enabled { "enable" } else { "disable" };
    let target = selector.target(command)?;

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<ControlRoles>(&client).await?;
    let outcome = if enabled {
        info!(guid = %guid, "Enabling control role");
        client.enable_control_roles(guid).await?
    } else {
        info!(guid = %guid, "Disabling control role");
        client.disable_control_roles(guid).await?
    };

    print_result(&outcome);
    Ok(())
}

async fn run_assign_users(
    config: &Config,
    selector: &RoleSelector,
    user_guids: Option<&str>,
) -> Result<()> {
    let target = selector.target("assign-users")?;
    let users = require_user_guids(user_guids, "assign-users")?;

    let client = build_client_from_config(config)?;
    let guid = target.resolve::<ControlRoles>(&client).await?;
    info!(guid = %guid, count = users.len(), "Assigning users to control role");
    let outcome = client.assign_control_role_users(&guid, users).await?;

    print_result(&outcome);
    Ok(())
}

async fn run_remove_users(config: &Config, user_guids: Option<&str>) -> Result<()> {
    let users = require_user_guids(user_guids, "remove-users")?;

    let client = build_client_from_config(config)?;
    info!(count = users.len(), "Removing users from control roles");
    let outcome = client.remove_control_role_users(users).await?;

    print_result(&outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_proto_passes_inline_value_through() {
        assert_eq!(
            read_proto(Some("AAEC".to_string()), None).unwrap(),
            Some("AAEC".to_string())
        );
        assert_eq!(read_proto(None, None).unwrap(), None);
    }

    #[test]
    fn test_read_proto_encodes_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x00, 0x01, 0x02, 0xff]).unwrap();

        let encoded = read_proto(None, Some(file.path())).unwrap();
        assert_eq!(encoded, Some("AAEC/w==".to_string()));
    }

    #[test]
    fn test_read_proto_missing_file_names_path() {
        let err = read_proto(None, Some(Path::new("/nonexistent/role.bin"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/role.bin"));
    }
}
