//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::store::{DataSource, FetchResult, FileSource, HttpSource, DEFAULT_DATA_URL};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the dataset is fetched from
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_data_url")]
    pub url: String,

    /// Local JSON file; takes precedence over `url` when set
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Request timeout. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_data_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_data_url(),
            file: None,
            timeout_secs: None,
        }
    }
}

impl SourceConfig {
    /// Build the configured data source
    pub fn build(&self) -> FetchResult<Box<dyn DataSource>> {
        match &self.file {
            Some(path) => Ok(Box::new(FileSource::new(path.clone()))),
            None => {
                let timeout = self.timeout_secs.map(Duration::from_secs);
                Ok(Box::new(HttpSource::new(self.url.clone(), timeout)?))
            }
        }
    }
}

/// Static bundle server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled browser dashboard (trunk `dist/`)
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8084
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("vizboard-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("vizboard").join("config.toml")),
            Some(PathBuf::from("/etc/vizboard/config.toml")),
            Some(PathBuf::from("./vizboard.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Source overrides
        if let Some(url) = lookup("VIZBOARD_DATA_URL") {
            self.source.url = url;
        }
        if let Some(file) = lookup("VIZBOARD_DATA_FILE") {
            self.source.file = Some(PathBuf::from(file));
        }

        // Server overrides
        if let Some(host) = lookup("VIZBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("VIZBOARD_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid VIZBOARD_PORT: {}", port),
            }
        }
        if let Some(dir) = lookup("VIZBOARD_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }

        // Logging overrides
        if let Some(level) = lookup("VIZBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("VIZBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    format!(
        r#"# Vizboard Configuration
#
# Environment variables override these settings:
# - VIZBOARD_DATA_URL
# - VIZBOARD_DATA_FILE
# - VIZBOARD_HOST
# - VIZBOARD_PORT
# - VIZBOARD_STATIC_DIR
# - VIZBOARD_LOG_LEVEL
# - VIZBOARD_LOG_FORMAT

[source]
# Dataset URL (a JSON array of report records)
url = "{url}"

# Read the dataset from a local file instead of the URL
# file = "./data.json"

# Request timeout in seconds (unset = wait indefinitely)
# timeout_secs = 30

[server]
# Static server host
host = "127.0.0.1"

# Static server port
port = 8084

# Compiled browser dashboard (output of `trunk build` in vizboard-ui/)
static_dir = "vizboard-ui/dist"

# Allowed CORS origins (empty = any)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#,
        url = DEFAULT_DATA_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source.url, DEFAULT_DATA_URL);
        assert!(config.source.file.is_none());
        assert!(config.source.timeout_secs.is_none());
        assert_eq!(config.server.addr(), "127.0.0.1:8084");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.source.url, defaults.source.url);
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.server.static_dir, defaults.server.static_dir);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nfile = \"/tmp/data.json\"\n\n[server]\nport = 9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source.file, Some(PathBuf::from("/tmp/data.json")));
        assert_eq!(config.source.url, DEFAULT_DATA_URL);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[server]\nport = \"not a port\"").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VIZBOARD_DATA_URL", "http://localhost:9999/data.json"),
            ("VIZBOARD_PORT", "9100"),
            ("VIZBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.source.url, "http://localhost:9999/data.json");
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "VIZBOARD_PORT").then(|| "http".to_string()));
        assert_eq!(config.server.port, 8084);
    }

    #[test]
    fn test_file_source_takes_precedence() {
        let source = SourceConfig {
            file: Some(PathBuf::from("data.json")),
            ..Default::default()
        };
        let built = source.build().unwrap();
        assert_eq!(built.describe(), "data.json");

        let built = SourceConfig::default().build().unwrap();
        assert_eq!(built.describe(), DEFAULT_DATA_URL);
    }
}
