//! Configuration loading — environment variables only.
//!
//! Every field has a default, so running with an empty environment works.

/// Port used when `PORT` is unset, empty or `0`.
pub const DEFAULT_PORT: u16 = 3456;

/// Interface used when `HOST` is unset or empty.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Tracing filter used when `RUST_LOG` is unset or empty.
pub const DEFAULT_LOG_FILTER: &str = "changelog_stubd=info,changelog_app=info,tower_http=info";

/// Process configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Filter directive (`RUST_LOG` syntax).
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] if `PORT` is set to something
    /// that is not a TCP port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|val| val.trim().to_string())
                .filter(|val| !val.is_empty())
        };

        let mut config = Self::default();
        if let Some(val) = non_empty("PORT") {
            let port: u16 = val.parse().map_err(|source| ConfigError::InvalidPort {
                value: val.clone(),
                source,
            })?;
            if port != 0 {
                config.port = port;
            }
        }
        if let Some(val) = non_empty("HOST") {
            config.host = val;
        }
        if let Some(val) = non_empty("RUST_LOG") {
            config.log_filter = val;
        }
        Ok(config)
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is not a number in `0..=65535`.
    #[error("invalid PORT value {value:?}")]
    InvalidPort {
        /// The offending value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, val)| ((*key).to_string(), (*val).to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 3456);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn should_use_custom_port() {
        let config = load(&[("PORT", "4000")]).unwrap();
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn should_fall_back_to_default_port_when_empty() {
        assert_eq!(load(&[("PORT", "")]).unwrap().port, DEFAULT_PORT);
        assert_eq!(load(&[("PORT", "  ")]).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn should_fall_back_to_default_port_when_zero() {
        assert_eq!(load(&[("PORT", "0")]).unwrap().port, DEFAULT_PORT);
    }

    #[test]
    fn should_reject_non_numeric_port() {
        let err = load(&[("PORT", "abc")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid PORT value \"abc\"");
    }

    #[test]
    fn should_reject_out_of_range_port() {
        assert!(load(&[("PORT", "70000")]).is_err());
        assert!(load(&[("PORT", "-1")]).is_err());
    }

    #[test]
    fn should_override_host_and_log_filter() {
        let config = load(&[("HOST", "127.0.0.1"), ("RUST_LOG", "debug")]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn should_format_bind_addr() {
        let config = load(&[("HOST", "127.0.0.1"), ("PORT", "9090")]).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }
}
