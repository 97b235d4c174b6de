//! Configuration management for curio.
//!
//! Configuration is read from `~/.config/curio/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is
//! created. The scrape endpoint and bearer token can also come from the
//! `CURIO_ENDPOINT` and `CURIO_AUTH_TOKEN` environment variables, which
//! always win over the file — tokens belong in the environment, not in
//! source or in a synced config file.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const ENDPOINT_ENV: &str = "CURIO_ENDPOINT";
pub const AUTH_TOKEN_ENV: &str = "CURIO_AUTH_TOKEN";

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scrape: ScrapeConfig,
    pub persist: PersistConfig,
    pub hooks: HookConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            persist: PersistConfig::default(),
            hooks: HookConfig::default(),
        }
    }
}

/// Settings for the scrape orchestrator and its JSON-RPC transport.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    /// JSON-RPC endpoint of the remote automation server.
    pub endpoint: Option<String>,

    /// Bearer credential for the automation server.
    pub auth_token: Option<String>,

    /// A tool whose trimmed description equals this phrase is the scrape
    /// workflow.
    pub target_description: String,

    /// Looser match: any tool whose description contains this substring.
    pub fallback_match: String,

    /// Request timeout for each remote call in seconds (default: 10).
    pub timeout_secs: u64,

    /// Delay before serving fallback data after a failure, in milliseconds
    /// (default: 1500).
    pub fallback_delay_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            auth_token: None,
            target_description: "This workflow gives the trending news for the day".to_string(),
            fallback_match: "trending news for the day".to_string(),
            timeout_secs: 10,
            fallback_delay_ms: 1500,
        }
    }
}

/// Settings for the simulated persistence adapter.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PersistConfig {
    /// Simulated save/unsave round-trip latency in milliseconds (default: 400).
    pub latency_ms: u64,
}

impl Default for PersistConfig {
    fn default() -> Self {
        Self { latency_ms: 400 }
    }
}

/// Settings for the hook generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    /// Simulated generation latency in milliseconds (default: 2000).
    pub latency_ms: u64,
}

impl Default for HookConfig {
    fn default() -> Self {
        Self { latency_ms: 2000 }
    }
}

impl Config {
    /// Load configuration from the default path, then apply environment
    /// overrides.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            Self::create_default_config(&config_path)?;
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific file, without environment
    /// overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Overlay `CURIO_ENDPOINT` / `CURIO_AUTH_TOKEN` when set and non-empty.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV) {
            if !endpoint.trim().is_empty() {
                self.scrape.endpoint = Some(endpoint);
            }
        }
        if let Ok(token) = std::env::var(AUTH_TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.scrape.auth_token = Some(token);
            }
        }
    }

    /// Get the default config file path: `~/.config/curio/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("curio").join("config.toml"))
    }

    /// Create a default config file with comments.
    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let default_config = Self::default_config_content();

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(default_config.as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    ///
    /// The endpoint and token entries are deliberately commented out: the
    /// generated file never carries credentials.
    fn default_config_content() -> String {
        r##"# Curio Configuration
#
# The scrape endpoint and bearer token can be set here or via the
# CURIO_ENDPOINT and CURIO_AUTH_TOKEN environment variables. The
# environment always wins. Prefer the environment for the token so it
# never ends up in a synced or committed file.

[scrape]
# endpoint = "https://automation.example.com/mcp-server/http"
# auth_token = ""

# A tool whose trimmed description equals this phrase is the scrape workflow
target_description = "This workflow gives the trending news for the day"

# Looser match: any tool whose description contains this substring
fallback_match = "trending news for the day"

# Request timeout for each remote call (seconds)
timeout_secs = 10

# Delay before serving fallback data after a failure (milliseconds)
fallback_delay_ms = 1500

[persist]
# Simulated save/unsave round-trip latency (milliseconds)
latency_ms = 400

[hooks]
# Simulated hook generation latency (milliseconds)
latency_ms = 2000
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.scrape.timeout_secs, 10);
        assert_eq!(config.scrape.fallback_delay_ms, 1500);
        assert_eq!(config.persist.latency_ms, 400);
        assert_eq!(config.hooks.latency_ms, 2000);
        // The generated file never carries credentials
        assert!(config.scrape.endpoint.is_none());
        assert!(config.scrape.auth_token.is_none());
    }

    #[test]
    fn test_partial_config() {
        let content = r#"
[scrape]
endpoint = "https://automation.example.com/rpc"
timeout_secs = 3
"#;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(
            config.scrape.endpoint.as_deref(),
            Some("https://automation.example.com/rpc")
        );
        assert_eq!(config.scrape.timeout_secs, 3);
        // Default values
        assert_eq!(config.scrape.fallback_delay_ms, 1500);
        assert_eq!(config.persist.latency_ms, 400);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");

        assert!(config.scrape.endpoint.is_none());
        assert_eq!(
            config.scrape.target_description,
            "This workflow gives the trending news for the day"
        );
        assert_eq!(config.hooks.latency_ms, 2000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[persist]\nlatency_ms = 25").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.persist.latency_ms, 25);
        assert_eq!(config.hooks.latency_ms, 2000);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not = [valid").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        std::env::set_var(ENDPOINT_ENV, "https://env.example.com/rpc");
        std::env::set_var(AUTH_TOKEN_ENV, "env-token");

        config.apply_env_overrides();

        assert_eq!(
            config.scrape.endpoint.as_deref(),
            Some("https://env.example.com/rpc")
        );
        assert_eq!(config.scrape.auth_token.as_deref(), Some("env-token"));

        std::env::remove_var(ENDPOINT_ENV);
        std::env::remove_var(AUTH_TOKEN_ENV);
    }
}
