use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::common::constants::{
    default_user_agent, ENV_CATALOG_URL, ENV_HTTP_TIMEOUT_SECONDS, ENV_SIMBAD_TAP_URL,
    MALDONADO2010_SOURCE, MALDONADO2010_URL, SIMBAD_TAP_URL,
};
use crate::error::{IndicatorError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub simbad: SimbadConfig,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub url: String,
    pub source_label: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            url: MALDONADO2010_URL.to_string(),
            source_label: MALDONADO2010_SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimbadConfig {
    pub tap_url: String,
}

impl Default for SimbadConfig {
    fn default() -> Self {
        Self {
            tap_url: SIMBAD_TAP_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// No timeout when unset; a stalled endpoint then stalls the caller.
    pub timeout_seconds: Option<u64>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Reads `path` when it exists, falls back to defaults otherwise, then
    /// applies environment overrides (a `.env` file is honored).
    pub fn load(path: &Path) -> Result<Self> {
        let _ = dotenv::dotenv();

        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                IndicatorError::Config(format!(
                    "Failed to read config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Loaded configuration from {}", path.display());
            Self::from_toml(&content)?
        } else {
            debug!("No config file at {}, using defaults", path.display());
            Config::default()
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overrides fields from a variable lookup; split out so tests need not
    /// touch the process environment.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_CATALOG_URL) {
            self.catalog.url = url;
        }
        if let Some(url) = lookup(ENV_SIMBAD_TAP_URL) {
            self.simbad.tap_url = url;
        }
        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECONDS) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                IndicatorError::Config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    ENV_HTTP_TIMEOUT_SECONDS, raw
                ))
            })?;
            self.http.timeout_seconds = Some(secs);
        }
        Ok(())
    }
}
