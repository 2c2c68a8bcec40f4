//! Profile file loading for configuration.
//!
//! Responsibilities:
//! - Locate and parse the JSON profile file.
//! - Apply the selected profile's settings to a `ConfigLoader`.
//!
//! Invariants:
//! - Profile settings are applied before environment variables (env vars take precedence).
//! - The profile name and file path come from the loader first, then from
//!   `ROLES_PROFILE` / `ROLES_CONFIG_PATH`.
//! - A missing file or missing profile is recorded, not raised, so that a complete
//!   configuration from env/CLI can still succeed in `build()`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::{ENV_CONFIG_PATH, ENV_PROFILE};
use crate::types::{ProfileConfig, ProfilesFile};

/// Returns the default path to the profile file.
///
/// - Linux: `~/.config/roles-cli/config.json`
/// - macOS: `~/Library/Application Support/roles-cli/config.json`
/// - Windows: `%AppData%\roles-cli\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", "roles-cli").ok_or_else(|| {
        ConfigError::ConfigDirUnavailable("no home directory could be determined".to_string())
    })?;

    Ok(proj_dirs.config_dir().join("config.json"))
}

/// Read and parse a profile file.
pub(crate) fn read_profiles_file(path: &Path) -> Result<ProfilesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply profile configuration from the profile file to the loader.
pub fn apply_profile(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let profile_name = match loader
        .profile_name()
        .cloned()
        .or_else(|| env_var_or_none(ENV_PROFILE))
    {
        Some(name) => name,
        None => return Ok(()),
    };
    loader.set_profile_name(Some(profile_name.clone()));

    let config_path = match loader
        .config_path()
        .cloned()
        .or_else(|| env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from))
    {
        Some(path) => path,
        None => default_config_path()?,
    };

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Profile file does not exist");
        loader.set_profile_missing(Some(profile_name));
        return Ok(());
    }

    let file = read_profiles_file(&config_path)?;
    match file.profiles.get(&profile_name) {
        Some(profile) => {
            tracing::debug!(profile = %profile_name, "Applying profile");
            apply_profile_config(loader, profile);
        }
        None => loader.set_profile_missing(Some(profile_name)),
    }

    Ok(())
}

fn apply_profile_config(loader: &mut ConfigLoader, profile: &ProfileConfig) {
    if let Some(url) = &profile.base_url {
        loader.set_base_url(Some(url.clone()));
    }
    if let Some(token) = &profile.api_token {
        loader.set_api_token(Some(token.clone()));
    }
    if let Some(skip) = profile.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = profile.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(size) = profile.page_size {
        loader.set_page_size(Some(size));
    }
}
