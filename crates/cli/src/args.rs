//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;
use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "roles-cli")]
#[command(about = "Manage admin roles and control roles on the admin server", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  roles-cli --url https://admin.example.com --token $ROLES_API_TOKEN admin-roles view --type 1\n  roles-cli admin-roles update --name Ops --user-groups eng,ops\n  roles-cli control-roles add --name Viewer --proto-file viewer.bin\n  roles-cli --profile prod control-roles disable --guid 3f2a9c1e\n"
)]
pub struct Cli {
    /// Base URL of the admin server (e.g., https://admin.example.com)
    #[arg(long = "url", global = true, env = "ROLES_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Bearer token for the admin API
    #[arg(
        long = "token",
        global = true,
        env = "ROLES_API_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "ROLES_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "ROLES_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Profile name to load from the config file
    #[arg(long, global = true, env = "ROLES_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location)
    #[arg(long, global = true, env = "ROLES_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format for view/get
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage admin roles
    AdminRoles {
        #[command(subcommand)]
        command: commands::admin_roles::AdminRolesCommand,
    },

    /// Manage control roles
    ControlRoles {
        #[command(subcommand)]
        command: commands::control_roles::ControlRolesCommand,
    },
}
