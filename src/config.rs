use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(default)]
    pub dbdir: Option<String>,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default = "default_logfile")]
    pub logfile: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub mock: MockConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub sqlite: Option<SqliteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SqliteConfig {
    pub filename: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default = "default_catalog_file")]
    pub file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file: default_catalog_file(),
        }
    }
}

/// Mock-mode settings. The artificial response delay mimics the latency of
/// a real backing service so the front end behaves the same either way.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MockConfig {
    #[serde(alias = "delayms", rename = "delayMs")]
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default)]
    pub favorites: Option<String>,
    #[serde(alias = "watchhistory", rename = "watchHistory")]
    #[serde(default)]
    pub watch_history: Option<String>,
    #[serde(default)]
    pub notifications: Option<String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            favorites: None,
            watch_history: None,
            notifications: None,
        }
    }
}

/// User preferences served by /api/user-preferences. Single-user app, so
/// these live in the config rather than per-account storage.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            language: default_language(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetadataConfig {
    #[serde(alias = "baseurl", rename = "baseUrl")]
    #[serde(default = "default_metadata_url")]
    pub base_url: String,
    #[serde(alias = "apikey", rename = "apiKey")]
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            base_url: default_metadata_url(),
            api_key: None,
        }
    }
}

fn default_port() -> String {
    "3080".to_string()
}

fn default_logfile() -> String {
    "stdout".to_string()
}

fn default_catalog_file() -> String {
    "movies.json".to_string()
}

fn default_delay_ms() -> u64 {
    300
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_metadata_url() -> String {
    "https://api.kinopoisk.dev/v1.4".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_string(), e))?;

        Ok(config)
    }

    /// The artificial response delay in effect. Only the in-memory mock
    /// backend simulates latency; with a database configured the delay
    /// is off regardless of the mock settings.
    pub fn mock_delay_ms(&self) -> u64 {
        if self.get_database_path().is_some() {
            return 0;
        }
        self.mock.delay_ms
    }

    pub fn get_database_path(&self) -> Option<String> {
        if let Some(ref sqlite) = self.database.sqlite {
            return Some(sqlite.filename.clone());
        }

        if let Some(ref dbdir) = self.dbdir {
            let path = PathBuf::from(dbdir).join("moviex-userdata.db");
            return Some(path.to_string_lossy().to_string());
        }

        None
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
}
