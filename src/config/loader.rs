//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::lifecycle::RunMode;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "SERVICE_CONFIG";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ServiceConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective configuration for this run.
///
/// Reads the file named by `SERVICE_CONFIG` when set, else starts from
/// defaults. Managed runs then bind all interfaces on the supervisor's
/// port (`PORT`, default 8080); the supervisor owns that choice.
pub fn load_from_env(mode: RunMode) -> Result<ServiceConfig, ConfigError> {
    let mut config = match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) => load_config(Path::new(&path))?,
        None => ServiceConfig::default(),
    };

    if mode == RunMode::Managed {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    Ok(config)
}
