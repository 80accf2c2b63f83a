//! Server configuration read from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_PATH: &str = "./flappy.db";
pub const DEFAULT_COUNT_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// Runtime settings for the server process
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// SQLite database file
    pub db_path: PathBuf,
    /// How often the cached game count is refreshed
    pub count_interval: Duration,
    /// Request body limit for `/create`
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            count_interval: Duration::from_secs(DEFAULT_COUNT_INTERVAL_SECS),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    /// Build config from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            bind_addr: parse_or(&lookup, "FLAPPY_BIND_ADDR", defaults.bind_addr),
            port: parse_or(&lookup, "PORT", defaults.port),
            db_path: lookup("FLAPPY_DB_PATH")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.db_path),
            count_interval: Duration::from_secs(
                parse_or(&lookup, "FLAPPY_COUNT_INTERVAL_SECS", DEFAULT_COUNT_INTERVAL_SECS).max(1),
            ),
            max_upload_bytes: parse_or(&lookup, "FLAPPY_MAX_UPLOAD_BYTES", defaults.max_upload_bytes),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path, PathBuf::from("./flappy.db"));
        assert_eq!(config.count_interval, Duration::from_secs(5));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "8080"),
            ("FLAPPY_BIND_ADDR", "127.0.0.1"),
            ("FLAPPY_DB_PATH", "/tmp/games.db"),
            ("FLAPPY_COUNT_INTERVAL_SECS", "30"),
            ("FLAPPY_MAX_UPLOAD_BYTES", "1024"),
        ]);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.db_path, PathBuf::from("/tmp/games.db"));
        assert_eq!(config.count_interval, Duration::from_secs(30));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("FLAPPY_COUNT_INTERVAL_SECS", "0")]);
        assert_eq!(config.port, DEFAULT_PORT);
        // A zero interval would make tokio's interval panic
        assert_eq!(config.count_interval, Duration::from_secs(1));
    }
}
