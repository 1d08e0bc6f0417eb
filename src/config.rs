//! Runtime configuration: database location, rule file and HTTP bind address.

use crate::constants::{DEFAULT_HOST, DEFAULT_PORT};
use crate::error::{AppError, AppResult};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const ENV_DB: &str = "ACTIVITY_INSIGHTS_DB";
pub const ENV_RULES: &str = "ACTIVITY_INSIGHTS_RULES";
pub const ENV_HOST: &str = "ACTIVITY_INSIGHTS_HOST";
pub const ENV_PORT: &str = "ACTIVITY_INSIGHTS_PORT";

const DB_FILE_NAME: &str = "user_activity.db";

/// Values given on the command line; each one beats the environment.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub db_path: Option<PathBuf>,
    pub rules_path: Option<PathBuf>,
}

/// Settings every command needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// Rule file to load instead of the built-in table.
    pub rules_path: Option<PathBuf>,
}

/// Bind address for `serve`, resolved only when the server runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn non_blank<F>(env: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    env(key).filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Resolve from flags, then the process environment, then defaults.
    pub fn resolve(overrides: Overrides) -> AppResult<Self> {
        Self::resolve_with(overrides, process_env)
    }

    pub fn resolve_with<F>(overrides: Overrides, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_path = match overrides
            .db_path
            .or_else(|| non_blank(&env, ENV_DB).map(PathBuf::from))
        {
            Some(path) => path,
            None => default_db_path()?,
        };
        let rules_path = overrides
            .rules_path
            .or_else(|| non_blank(&env, ENV_RULES).map(PathBuf::from));

        Ok(Self {
            db_path,
            rules_path,
        })
    }
}

impl ServerConfig {
    pub fn resolve(host: Option<String>, port: Option<u16>) -> AppResult<Self> {
        Self::resolve_with(host, port, process_env)
    }

    pub fn resolve_with<F>(host: Option<String>, port: Option<u16>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = host
            .or_else(|| non_blank(&env, ENV_HOST))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(port) => port,
            None => non_blank(&env, ENV_PORT).map_or(Ok(DEFAULT_PORT), |raw| parse_port(&raw))?,
        };
        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: &str) -> AppResult<u16> {
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{ENV_PORT}='{raw}' is not a valid port: {e}")))
}

/// `user_activity.db` inside the platform data directory, which is created if missing.
pub fn default_db_path() -> AppResult<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "activity-insights", "ActivityInsights")
        .ok_or_else(|| AppError::Config("Could not determine project directories".into()))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;
    Ok(data_dir.join(DB_FILE_NAME))
}
