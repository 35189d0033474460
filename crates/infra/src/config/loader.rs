//! Configuration loader
//!
//! Resolves the active [`Profile`] from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Unless a config file or profile was requested explicitly, attempts to
//!    load a complete profile from environment variables
//! 2. Otherwise loads a config file and selects a profile from it
//! 3. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SEARCHADS_CLIENT_ID`: OAuth client id
//! - `SEARCHADS_CLIENT_SECRET`: Pre-signed client assertion
//! - `SEARCHADS_ORG_ID`: Organization scope for every call
//! - `SEARCHADS_BASE_URL`: API base URL (optional)
//! - `SEARCHADS_TOKEN_URL`: Token endpoint (optional)
//! - `SEARCHADS_CONFIG`: Config file path (optional)
//! - `SEARCHADS_PROFILE`: Profile name (optional)
//!
//! ## File Locations
//! When no path is given, the loader probes (in order):
//! 1. `<platform config dir>/searchads/config.{toml,json}`
//! 2. `./searchads.{toml,json}` (current working directory)
//!
//! ## Profile Selection
//! Explicit profile, then `SEARCHADS_PROFILE`, then the file's
//! `default_profile`, then `"default"`.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use searchads_domain::{Config, Profile, Result, SearchAdsError};

pub const ENV_CLIENT_ID: &str = "SEARCHADS_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SEARCHADS_CLIENT_SECRET";
pub const ENV_ORG_ID: &str = "SEARCHADS_ORG_ID";
pub const ENV_BASE_URL: &str = "SEARCHADS_BASE_URL";
pub const ENV_TOKEN_URL: &str = "SEARCHADS_TOKEN_URL";
pub const ENV_CONFIG: &str = "SEARCHADS_CONFIG";
pub const ENV_PROFILE: &str = "SEARCHADS_PROFILE";

/// Caller overrides for [`load`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Explicit config file (`--config`)
    pub config_path: Option<PathBuf>,
    /// Explicit profile name (`--profile`)
    pub profile: Option<String>,
}

/// Resolve the active profile with automatic fallback strategy
///
/// # Errors
/// Returns `SearchAdsError::Config` if:
/// - No source yields a profile
/// - File format is invalid
/// - The selected profile does not exist
/// - Required credentials are missing
pub fn load(options: &LoadOptions) -> Result<Profile> {
    if options.config_path.is_none() && options.profile.is_none() {
        match load_from_env() {
            Ok(profile) => {
                tracing::info!("Configuration loaded from environment variables");
                return Ok(profile);
            }
            Err(e) => {
                tracing::debug!(error = %e, "Failed to load from environment, trying file");
            }
        }
    }

    let config = load_from_file(options.config_path.clone())?;
    let requested = options.profile.clone().or_else(|| non_empty_env(ENV_PROFILE));
    let profile = config.profile(requested.as_deref())?.clone();
    profile.validate()?;
    Ok(profile)
}

/// Load a profile from environment variables
///
/// Client id, secret and org id must all be present.
///
/// # Errors
/// Returns `SearchAdsError::Config` if a required variable is missing.
pub fn load_from_env() -> Result<Profile> {
    let profile = Profile {
        client_id: env_var(ENV_CLIENT_ID)?,
        client_secret: env_var(ENV_CLIENT_SECRET)?,
        org_id: env_var(ENV_ORG_ID)?,
        base_url: non_empty_env(ENV_BASE_URL),
        token_url: non_empty_env(ENV_TOKEN_URL),
        ..Profile::default()
    };
    profile.validate()?;
    Ok(profile)
}

/// Load a config file
///
/// If `path` is `None`, uses `SEARCHADS_CONFIG` when set and otherwise
/// probes the standard locations.
///
/// # Errors
/// Returns `SearchAdsError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when probing)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.or_else(|| non_empty_env(ENV_CONFIG).map(PathBuf::from));

    let config_path = match explicit {
        Some(p) => {
            if !p.exists() {
                return Err(SearchAdsError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            SearchAdsError::Config(format!(
                "No credentials found: set {ENV_CLIENT_ID}, {ENV_CLIENT_SECRET} and \
                 {ENV_ORG_ID}, or create a config file"
            ))
        })?,
    };

    tracing::debug!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| SearchAdsError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension; anything but `.json` is read as
/// TOML.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| SearchAdsError::Config(format!("Invalid JSON format: {}", e))),
        _ => toml::from_str(contents)
            .map_err(|e| SearchAdsError::Config(format!("Invalid TOML format: {}", e))),
    }
}

/// Probe the standard locations for a config file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(dirs) = ProjectDirs::from("", "", "searchads") {
        candidates.push(dirs.config_dir().join("config.toml"));
        candidates.push(dirs.config_dir().join("config.json"));
    }

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("searchads.toml"));
        candidates.push(cwd.join("searchads.json"));
    }

    candidates.into_iter().find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `SearchAdsError::Config` if the variable is unset or blank.
fn env_var(key: &str) -> Result<String> {
    non_empty_env(key).ok_or_else(|| {
        SearchAdsError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
