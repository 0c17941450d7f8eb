//! Server configuration, read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `USERSTORE_ADDR` | `0.0.0.0:8080` |
//! | `USERSTORE_REQUEST_TIMEOUT_SECS` | `10` |
//! | `USERSTORE_SHUTDOWN_GRACE_SECS` | `10` |

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub addr: SocketAddr,
    /// Upper bound on a single request, from first byte read to response written.
    pub request_timeout: Duration,
    /// How long in-flight requests may keep running after a shutdown signal.
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            shutdown_grace: Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unset keys use the
    /// default; unparsable values log a warning and use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let secs = |key: &str, default: Duration| {
            Duration::from_secs(parse_or(key, lookup(key), default.as_secs()))
        };

        Self {
            addr: parse_or("USERSTORE_ADDR", lookup("USERSTORE_ADDR"), defaults.addr),
            request_timeout: secs("USERSTORE_REQUEST_TIMEOUT_SECS", defaults.request_timeout),
            shutdown_grace: secs("USERSTORE_SHUTDOWN_GRACE_SECS", defaults.shutdown_grace),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + core::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "invalid config value; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, ServerConfig::default());
        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("USERSTORE_ADDR", "127.0.0.1:9000"),
            ("USERSTORE_REQUEST_TIMEOUT_SECS", "3"),
            ("USERSTORE_SHUTDOWN_GRACE_SECS", " 1 "),
        ]));
        assert_eq!(cfg.addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(cfg.request_timeout, Duration::from_secs(3));
        assert_eq!(cfg.shutdown_grace, Duration::from_secs(1));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("USERSTORE_ADDR", "nowhere"),
            ("USERSTORE_REQUEST_TIMEOUT_SECS", "-5"),
        ]));
        assert_eq!(cfg, ServerConfig::default());
    }
}
