//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::history::DEFAULT_HISTORY_CAPACITY;

const BIND_ADDR: &str = "TRANSIT_BIND_ADDR";
const SEED_FILE: &str = "TRANSIT_SEED_FILE";
const STATIC_DIR: &str = "TRANSIT_STATIC_DIR";
const POSITION_TTL_SECS: &str = "TRANSIT_POSITION_TTL_SECS";
const HISTORY_CAPACITY: &str = "TRANSIT_HISTORY_CAPACITY";

/// Error reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Process-level configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// JSON seed file with routes, stops and buses. Built-in sample data
    /// is used when unset.
    pub seed_file: Option<PathBuf>,

    /// Directory served under `/static`.
    pub static_dir: String,

    /// How long a reported bus position stays live.
    pub position_ttl: Duration,

    /// Number of searches kept in the history log.
    pub history_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            seed_file: None,
            static_dir: "static".to_string(),
            position_ttl: Duration::from_secs(300),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get(BIND_ADDR) {
            Some(value) => parse(BIND_ADDR, &value)?,
            None => defaults.bind_addr,
        };

        let position_ttl = match get(POSITION_TTL_SECS) {
            Some(value) => Duration::from_secs(positive(POSITION_TTL_SECS, &value)?),
            None => defaults.position_ttl,
        };

        let history_capacity = match get(HISTORY_CAPACITY) {
            Some(value) => positive(HISTORY_CAPACITY, &value)?,
            None => defaults.history_capacity,
        };

        Ok(Self {
            bind_addr,
            seed_file: get(SEED_FILE).map(PathBuf::from),
            static_dir: get(STATIC_DIR).unwrap_or(defaults.static_dir),
            position_ttl,
            history_capacity,
        })
    }
}

fn parse<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn positive(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    let n: u64 = parse(var, value)?;
    if n == 0 {
        return Err(ConfigError::Invalid {
            var,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(cfg.position_ttl, Duration::from_secs(300));
        assert_eq!(cfg.history_capacity, 1000);
    }

    #[test]
    fn reads_all_variables() {
        let cfg = config(&[
            (BIND_ADDR, "0.0.0.0:8080"),
            (SEED_FILE, "/data/routes.json"),
            (STATIC_DIR, "/srv/static"),
            (POSITION_TTL_SECS, "60"),
            (HISTORY_CAPACITY, "25"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.seed_file, Some(PathBuf::from("/data/routes.json")));
        assert_eq!(cfg.static_dir, "/srv/static");
        assert_eq!(cfg.position_ttl, Duration::from_secs(60));
        assert_eq!(cfg.history_capacity, 25);
    }

    #[test]
    fn blank_values_use_defaults() {
        let cfg = config(&[(SEED_FILE, "  "), (BIND_ADDR, "")]).unwrap();
        assert_eq!(cfg.seed_file, None);
        assert_eq!(cfg.bind_addr, ServerConfig::default().bind_addr);
    }

    #[test]
    fn invalid_address_rejected() {
        let err = config(&[(BIND_ADDR, "localhost")]).unwrap_err();
        let ConfigError::Invalid { var, value, .. } = err;
        assert_eq!(var, BIND_ADDR);
        assert_eq!(value, "localhost");
    }

    #[test]
    fn zero_and_garbage_numbers_rejected() {
        assert!(config(&[(POSITION_TTL_SECS, "0")]).is_err());
        assert!(config(&[(POSITION_TTL_SECS, "soon")]).is_err());
        assert!(config(&[(HISTORY_CAPACITY, "-1")]).is_err());

        let err = config(&[(HISTORY_CAPACITY, "0")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "TRANSIT_HISTORY_CAPACITY has invalid value \"0\": must be greater than zero"
        );
    }
}
