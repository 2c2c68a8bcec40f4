//! Common test utilities for CLI integration tests.
//!
//! # Invariants
//! - Every command built here ignores `.env` files and inherited `ROLES_*` variables
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use assert_cmd::Command;

pub const TEST_TOKEN: &str = "test-token";

const ROLES_ENV_VARS: &[&str] = &[
    "ROLES_BASE_URL",
    "ROLES_API_TOKEN",
    "ROLES_TIMEOUT",
    "ROLES_SKIP_VERIFY",
    "ROLES_PAGE_SIZE",
    "ROLES_PROFILE",
    "ROLES_CONFIG_PATH",
    "RUST_LOG",
];

/// Returns a hermetic `roles-cli` command with no connection settings.
pub fn roles_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("roles-cli");
    cmd.env("DOTENV_DISABLED", "1");
    for var in ROLES_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// Returns a hermetic command pointed at `base_url` with the test token.
#[allow(dead_code)]
pub fn roles_cmd_with_server(base_url: &str) -> Command {
    let mut cmd = roles_cmd();
    cmd.env("ROLES_BASE_URL", base_url);
    cmd.env("ROLES_API_TOKEN", TEST_TOKEN);
    cmd
}
