use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use recipe_core::SearchScope;
use recipe_engine::{ClientConfig, FetchSettings};
use recipe_logging::recipe_info;
use serde::{Deserialize, Serialize};

use super::error::AppError;

pub const DEFAULT_CONFIG_FILENAME: &str = "recipe_viewer.ron";

/// Runtime settings, read from a RON file and then overridden by CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub base_url: String,
    pub catalog_path: String,
    pub search_scope: SearchScope,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientConfig::default();
        Self {
            base_url: client.base_url,
            catalog_path: client.catalog_path,
            search_scope: SearchScope::default(),
            connect_timeout_secs: client.fetch.connect_timeout.as_secs(),
            request_timeout_secs: client.fetch.request_timeout.as_secs(),
            redirect_limit: client.fetch.redirect_limit,
            max_bytes: client.fetch.max_bytes,
        }
    }
}

impl AppConfig {
    /// Reads `path`, or `./recipe_viewer.ron` if it exists, or falls back to defaults.
    ///
    /// An explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILENAME);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| AppError::ConfigRead {
            path: path.clone(),
            source,
        })?;
        let config = ron::from_str(&text).map_err(|source| AppError::ConfigParse {
            path: path.clone(),
            source,
        })?;
        recipe_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            catalog_path: self.catalog_path.clone(),
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                redirect_limit: self.redirect_limit,
                max_bytes: self.max_bytes,
                ..FetchSettings::default()
            },
        }
    }
}
