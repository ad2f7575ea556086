use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};

use crate::domain::error::{AppError, Result};
use crate::domain::review::ExporterConfig;

/// Prefix for environment overrides, e.g. `REVIEW_EXPORTER_PREVIEW_LIMIT=10`.
/// Nested keys use `__`: `REVIEW_EXPORTER_DATE__TIMEZONE=utc`.
pub const ENV_PREFIX: &str = "REVIEW_EXPORTER_";

/// Looked up in the working directory when no file is given
pub const DEFAULT_CONFIG_FILE: &str = "review-exporter.toml";

/// Layered config: defaults, then TOML file, then environment
pub struct ConfigService {
    config_path: Option<PathBuf>,
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Use an explicit config file; it must exist
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: Some(path.into()),
        }
    }

    pub fn figment(&self) -> Figment {
        let file = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Figment::from(Serialized::defaults(ExporterConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(&self) -> Result<ExporterConfig> {
        if let Some(path) = self.config_path.as_deref() {
            ensure_exists(path)?;
        }

        let config: ExporterConfig = self.figment().extract()?;
        config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid exporter config: {}", e))
        })?;

        tracing::debug!(?config, "Loaded exporter config");
        Ok(config)
    }
}

fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AppError::ConfigError(format!(
            "Config file not found: {}",
            path.display()
        )))
    }
}
