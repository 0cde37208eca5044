//! Environment configuration for the server binary.
//!
//! | Variable | Default |
//! |---|---|
//! | `TODOLIST_BIND` | `0.0.0.0` |
//! | `PORT` | `3000` |
//! | `TODOLIST_DB_PATH` | `todolist.db` (`:memory:` for an in-memory store) |
//! | `TODOLIST_LOG_DIR` | unset, stderr only |
//! | `TODOLIST_LOG_LEVEL` | build-mode default |

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const ENV_BIND: &str = "TODOLIST_BIND";
pub const ENV_PORT: &str = "PORT";
pub const ENV_DB_PATH: &str = "TODOLIST_DB_PATH";
pub const ENV_LOG_DIR: &str = "TODOLIST_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "TODOLIST_LOG_LEVEL";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PATH: &str = "todolist.db";
const IN_MEMORY_DB: &str = ":memory:";

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbLocation {
    Memory,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db: DbLocation,
    pub log_dir: Option<String>,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
    InvalidBindAddress(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPort(value) => write!(f, "invalid {ENV_PORT} value `{value}`"),
            Self::InvalidBindAddress(value) => {
                write!(f, "invalid {ENV_BIND} value `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let ip = match get(ENV_BIND) {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidBindAddress(value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match get(ENV_PORT) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };
        let db = match get(ENV_DB_PATH) {
            Some(value) if value == IN_MEMORY_DB => DbLocation::Memory,
            Some(value) => DbLocation::File(PathBuf::from(value)),
            None => DbLocation::File(PathBuf::from(DEFAULT_DB_PATH)),
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            db,
            log_dir: get(ENV_LOG_DIR),
            log_level: get(ENV_LOG_LEVEL)
                .unwrap_or_else(|| todolist_core::default_log_level().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, DbLocation, ServerConfig};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_listen_on_3000_with_file_store() {
        let config = config_from(&[]).expect("defaults should parse");
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.db, DbLocation::File(PathBuf::from("todolist.db")));
        assert_eq!(config.log_dir, None);
        assert_eq!(config.log_level, todolist_core::default_log_level());
    }

    #[test]
    fn reads_overrides_and_memory_store() {
        let config = config_from(&[
            ("TODOLIST_BIND", "127.0.0.1"),
            ("PORT", "8080"),
            ("TODOLIST_DB_PATH", ":memory:"),
            ("TODOLIST_LOG_DIR", "/var/log/todolist"),
            ("TODOLIST_LOG_LEVEL", "warn"),
        ])
        .expect("overrides should parse");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.db, DbLocation::Memory);
        assert_eq!(config.log_dir.as_deref(), Some("/var/log/todolist"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("TODOLIST_LOG_DIR", "")])
            .expect("blank values should be ignored");
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn rejects_invalid_port_and_bind_address() {
        assert_eq!(
            config_from(&[("PORT", "http")]),
            Err(ConfigError::InvalidPort("http".to_string()))
        );
        assert_eq!(
            config_from(&[("TODOLIST_BIND", "localhost:1")]),
            Err(ConfigError::InvalidBindAddress("localhost:1".to_string()))
        );
    }
}
