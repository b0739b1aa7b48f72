//! Viewer server configuration, read from the environment.
//!
//! | variable         | default           |
//! |------------------|-------------------|
//! | `HOST`           | `0.0.0.0`         |
//! | `PORT`           | `8080`            |
//! | `SAGA_DATA_FILE` | `saga_store.json` |
//! | `SAGA_POLL_SECS` | `5`               |
//! | `SAGA_ACCESS`    | `read_only`       |

use std::path::PathBuf;
use std::time::Duration;

/// Configuration errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    InvalidValue { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Whether this process may write the league snapshot.
///
/// Viewer deployments are read-only; only an explicitly configured admin
/// instance accepts uploads.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AccessMode {
    #[default]
    ReadOnly,
    ReadWrite,
}

impl AccessMode {
    pub fn allows_writes(self) -> bool {
        self == AccessMode::ReadWrite
    }
}

impl std::str::FromStr for AccessMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "read_only" | "readonly" | "viewer" => Ok(AccessMode::ReadOnly),
            "read_write" | "readwrite" | "admin" => Ok(AccessMode::ReadWrite),
            _ => Err(()),
        }
    }
}

/// Everything the viewer binary needs to start.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Snapshot file the poller reloads.
    pub data_file: PathBuf,
    pub poll_interval: Duration,
    pub access: AccessMode,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_data_file() -> PathBuf {
    PathBuf::from("saga_store.json")
}

fn default_poll_secs() -> u64 {
    5
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            poll_interval: Duration::from_secs(default_poll_secs()),
            access: AccessMode::default(),
        }
    }
}

impl ServerConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup` (unset keys return None). Unset keys take defaults;
    /// set but unparsable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(default_host);
        let port = parse_or("PORT", lookup("PORT"), default_port())?;
        let data_file = lookup("SAGA_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_file);
        let poll_secs: u64 = parse_or("SAGA_POLL_SECS", lookup("SAGA_POLL_SECS"), default_poll_secs())?;
        if poll_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "SAGA_POLL_SECS",
                value: "0".to_string(),
            });
        }
        let access = parse_or("SAGA_ACCESS", lookup("SAGA_ACCESS"), AccessMode::default())?;

        Ok(Self {
            host,
            port,
            data_file,
            poll_interval: Duration::from_secs(poll_secs),
            access,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
