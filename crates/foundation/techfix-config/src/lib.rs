//! Configuration for the TechFix booking server
//!
//! Resolution order, later wins:
//!
//! 1. built-in defaults
//! 2. YAML file (`--config`, or `$CONFIG_DIR/techfix/config.yaml` if present)
//! 3. environment (`TECHFIX_BIND`, `TECHFIX_BANNER_MS`, `TECHFIX_VIEW_TTL_SECS`)
//! 4. command-line flags, applied by the binary
//!
//! ```yaml
//! server:
//!   bind: 0.0.0.0:8080
//! booking:
//!   banner_ms: 5000
//!   view_ttl_secs: 1800
//!   sweep_interval_secs: 60
//! ```

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENV_BIND: &str = "TECHFIX_BIND";
pub const ENV_BANNER_MS: &str = "TECHFIX_BANNER_MS";
pub const ENV_VIEW_TTL_SECS: &str = "TECHFIX_VIEW_TTL_SECS";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid bind address: {0}")]
    InvalidBind(String),

    #[error("Invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct TechfixConfig {
    pub server: ServerConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// How long the success banner stays up after a booking
    pub banner_ms: u64,
    /// Views untouched for this long are dropped
    pub view_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            banner_ms: 5000,
            view_ttl_secs: 30 * 60,
            sweep_interval_secs: 60,
        }
    }
}

impl BookingConfig {
    pub fn banner_duration(&self) -> Duration {
        Duration::from_millis(self.banner_ms)
    }

    pub fn view_ttl(&self) -> Duration {
        Duration::from_secs(self.view_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        // A zero period would make tokio's interval panic
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}

impl TechfixConfig {
    /// `$CONFIG_DIR/techfix/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("techfix").join("config.yaml"))
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }

    /// Load from `path`, or from the default location when it exists, then
    /// apply environment overrides.
    ///
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => match Self::default_path() {
                Some(p) if p.exists() => Self::from_file(&p)?,
                _ => Self::default(),
            },
        };
        config.with_env(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an environment lookup
    pub fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND) {
            self.server.bind = bind;
        }
        if let Some(ms) = lookup(ENV_BANNER_MS) {
            self.booking.banner_ms = parse_env(ENV_BANNER_MS, ms)?;
        }
        if let Some(secs) = lookup(ENV_VIEW_TTL_SECS) {
            self.booking.view_ttl_secs = parse_env(ENV_VIEW_TTL_SECS, secs)?;
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.server.bind.clone()))
    }
}

fn parse_env(var: &'static str, value: String) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = TechfixConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:3000");
        assert_eq!(config.booking.banner_duration(), Duration::from_millis(5000));
        assert_eq!(config.booking.view_ttl(), Duration::from_secs(1800));
        assert_eq!(config.booking.sweep_interval(), Duration::from_secs(60));
        assert!(config.bind_addr().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = TechfixConfig::from_yaml("booking:\n  banner_ms: 2500\n").unwrap();
        assert_eq!(config.booking.banner_ms, 2500);
        assert_eq!(config.booking.view_ttl_secs, 1800);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(TechfixConfig::from_yaml("  \n").unwrap(), TechfixConfig::default());
    }

    #[test]
    fn test_bad_yaml() {
        let err = TechfixConfig::from_yaml("booking: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides_file() {
        let env: HashMap<&str, &str> = [(ENV_BIND, "0.0.0.0:8080"), (ENV_BANNER_MS, "750")]
            .into_iter()
            .collect();
        let config = TechfixConfig::from_yaml("server:\n  bind: 127.0.0.1:9000\n")
            .unwrap()
            .with_env(|var| env.get(var).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.booking.banner_ms, 750);
        assert_eq!(config.bind_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_bad_env_value() {
        let err = TechfixConfig::default()
            .with_env(|var| (var == ENV_VIEW_TTL_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: ENV_VIEW_TTL_SECS, .. }));
    }

    #[test]
    fn test_bad_bind() {
        let mut config = TechfixConfig::default();
        config.server.bind = "localhost".into();
        assert!(matches!(config.bind_addr(), Err(ConfigError::InvalidBind(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let path = std::env::temp_dir().join("techfix_missing_config_test.yaml");
        let err = TechfixConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!("techfix_config_{}.yaml", std::process::id()));
        std::fs::write(&path, "booking:\n  view_ttl_secs: 90\n").unwrap();

        let config = TechfixConfig::from_file(&path).unwrap();
        assert_eq!(config.booking.view_ttl_secs, 90);

        std::fs::remove_file(&path).ok();
    }
}
