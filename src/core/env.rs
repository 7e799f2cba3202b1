// core/env.rs

//! # Client Configuration Discovery
//!
//! Finds the workspace host and token for the API client. Values come from
//! the process environment first and from a dotenv file second.

use std::collections::HashMap;
use std::env;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::app::{ENV_HOST, ENV_TOKEN};

/// Errors raised while discovering client configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} is not set in the environment or the env file")]
    Missing(&'static str),

    #[error("Failed to read env file {path}: {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Type alias for configuration results
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Connection settings for the workspace API.
#[derive(Clone, PartialEq)]
pub struct ClientConfig {
    /// Workspace base URL, with scheme and without trailing slash
    pub host: String,
    /// Bearer token
    pub token: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("host", &self.host)
            .field("token", &"****")
            .finish()
    }
}

impl ClientConfig {
    /// Discovers configuration from the process environment and `env_file`.
    pub fn discover(env_file: &str) -> ConfigResult<Self> {
        let file_vars = load_env_file(env_file)?;
        Self::from_sources(|key| env::var(key).ok(), &file_vars)
    }

    /// Resolves configuration from a variable lookup and dotenv values.
    /// The lookup wins over the file.
    pub fn from_sources<F>(lookup: F, file_vars: &HashMap<String, String>) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &'static str| -> ConfigResult<String> {
            lookup(key)
                .or_else(|| file_vars.get(key).cloned())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let host = normalize_host(&resolve(ENV_HOST)?);
        let token = resolve(ENV_TOKEN)?;
        debug!("Workspace host: {}", host);

        Ok(Self { host, token })
    }
}

/// Adds `https://` when the host has no scheme and strips trailing slashes.
pub fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.starts_with("https://") || host.starts_with("http://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// Loads variables from a dotenv file. A missing file yields no variables.
pub fn load_env_file(env_file: &str) -> ConfigResult<HashMap<String, String>> {
    let mut env_vars = HashMap::new();

    let dotenv_path = Path::new(env_file);
    if !dotenv_path.exists() {
        debug!("No .env file found at: {}", env_file);
        return Ok(env_vars);
    }

    debug!("Loading environment variables from: {}", env_file);
    let to_config_error = |source: dotenvy::Error| ConfigError::EnvFile {
        path: env_file.to_string(),
        source,
    };
    for item in dotenvy::from_path_iter(dotenv_path).map_err(to_config_error)? {
        let (key, value) = item.map_err(to_config_error)?;
        debug!("  Loaded env var: {}", key);
        env_vars.insert(key, value);
    }

    Ok(env_vars)
}
