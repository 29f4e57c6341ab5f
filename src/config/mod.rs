// Configuration module entry point
// Loads layered configuration and builds the runtime state

mod state;
mod types;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use std::collections::HashSet;
use std::net::SocketAddr;

use crate::logger::LogLevel;

// Re-export public types
pub use state::{AppState, DownloadTarget};
pub use types::{
    Config, DownloadRoute, DownloadsConfig, HealthConfig, LoggingConfig, PerformanceConfig,
    RoutesConfig, ServerConfig,
};

/// Environment variable prefix, e.g. `DOWNLOADS_SERVER__PORT=9000`
const ENV_PREFIX: &str = "DOWNLOADS";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );
        Self::build(builder)
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml));
        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate().map_err(ConfigError::Message)?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with
    fn validate(&self) -> Result<(), String> {
        self.logging
            .level
            .parse::<LogLevel>()
            .map_err(|e| format!("logging.level: {e}"))?;

        if self.server.workers == Some(0) {
            return Err("server.workers must be at least 1".to_string());
        }

        if self.performance.read_timeout == 0 || self.performance.write_timeout == 0 {
            return Err("performance: read_timeout and write_timeout must be positive".to_string());
        }

        if self.downloads.routes.is_empty() {
            return Err("downloads.routes: at least one download route is required".to_string());
        }

        let mut seen = HashSet::new();
        for route in &self.downloads.routes {
            if !route.path.starts_with('/') {
                return Err(format!(
                    "downloads.routes: path '{}' must start with '/'",
                    route.path
                ));
            }
            if !seen.insert(route.path.as_str()) {
                return Err(format!(
                    "downloads.routes: duplicate path '{}'",
                    route.path
                ));
            }
            if self.routes.health.claims(&route.path) {
                return Err(format!(
                    "downloads.routes: path '{}' is taken by a health probe",
                    route.path
                ));
            }
            if let Some(name) = &route.filename {
                if name.is_empty()
                    || name.chars().any(|c| c == '"' || c == '\\' || c.is_control())
                {
                    return Err(format!(
                        "downloads.routes: filename {name:?} for '{}' is not a valid attachment name",
                        route.path
                    ));
                }
            }
        }

        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
