use crate::error::{CatalogError, Result};
use crate::lookup::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TEMPLATE: &str = "_static/index_template.html";
const DEFAULT_OUTPUT: &str = "index.html";
const DEFAULT_SITE_TITLE: &str = "My Movie App";

/// Keys accepted by [`CatalogConfig::get`] and [`CatalogConfig::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "api-key",
    "api-url",
    "timeout-secs",
    "template",
    "output",
    "site-title",
];

/// Configuration for the catalog, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// OMDb API key. The `OMDB_API_KEY` / `API_KEY` environment variables take precedence.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Website template, relative paths resolve against the working directory
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_output")]
    pub output: PathBuf,

    #[serde(default = "default_site_title")]
    pub site_title: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_template() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATE)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            template: default_template(),
            output: default_output(),
            site_title: default_site_title(),
        }
    }
}

impl CatalogConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CatalogError::Io)?;
        let config: CatalogConfig =
            serde_json::from_str(&content).map_err(CatalogError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(CatalogError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(CatalogError::Serialization)?;
        fs::write(config_path, content).map_err(CatalogError::Io)?;
        Ok(())
    }

    /// Applies `OMDB_API_KEY`, falling back to `API_KEY`.
    pub fn with_env_overrides(mut self) -> Self {
        let from_env = std::env::var("OMDB_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.trim().is_empty());
        if from_env.is_some() {
            self.api_key = from_env;
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api-key" => Some(self.api_key.clone().unwrap_or_default()),
            "api-url" => Some(self.api_url.clone()),
            "timeout-secs" => Some(self.timeout_secs.to_string()),
            "template" => Some(self.template.display().to_string()),
            "output" => Some(self.output.display().to_string()),
            "site-title" => Some(self.site_title.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "api-key" => {
                self.api_key = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.trim().to_string())
                };
            }
            "api-url" => self.api_url = value.to_string(),
            "timeout-secs" => {
                self.timeout_secs = value
                    .parse()
                    .map_err(|_| format!("timeout-secs must be a whole number, got '{}'", value))?;
            }
            "template" => self.template = PathBuf::from(value),
            "output" => self.output = PathBuf::from(value),
            "site-title" => self.site_title = value.to_string(),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// Every key with its current value, masking the API key.
    pub fn entries(&self) -> Vec<(String, String)> {
        CONFIG_KEYS
            .iter()
            .map(|key| {
                let value = match *key {
                    "api-key" if self.api_key.is_some() => "********".to_string(),
                    _ => self.get(key).unwrap_or_default(),
                };
                (key.to_string(), value)
            })
            .collect()
    }
}
