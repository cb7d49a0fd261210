//! Application configuration (postboard.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Environment variable that overrides the configured read token
const TOKEN_ENV: &str = "POSTBOARD_STORE_TOKEN";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Site presentation settings
    pub site: SiteConfig,
    /// Content store connection settings
    pub store: StoreConfig,
    /// Web server settings
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply environment overrides. Secrets are taken from the environment
    /// in preference to the config file.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.store.token = Some(token);
            }
        }
        self
    }
}

/// Site presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub language: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Postboard".to_string(),
            description: String::new(),
            language: "en".to_string(),
        }
    }
}

/// Content store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Project identifier on the hosted content store
    pub project_id: String,
    /// Dataset to query
    pub dataset: String,
    /// Content store API version
    pub api_version: String,
    /// Read token, if the dataset is private
    pub token: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Full base URL override (takes precedence over project_id)
    pub base_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: "demo".to_string(),
            dataset: "production".to_string(),
            api_version: "2023-08-01".to_string(),
            token: None,
            timeout_secs: 10,
            base_url: None,
        }
    }
}

impl StoreConfig {
    /// The query endpoint for the configured project and dataset
    pub fn query_endpoint(&self) -> String {
        let base = match &self.base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.sanity.io", self.project_id),
        };
        format!("{}/v{}/data/query/{}", base, self.api_version, self.dataset)
    }
}

/// Web server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.site.title, "Postboard");
        assert_eq!(config.store.dataset, "production");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
site:
  title: My Posts
store:
  project_id: abc123
  dataset: staging
server:
  port: 8080
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.title, "My Posts");
        assert_eq!(config.store.project_id, "abc123");
        assert_eq!(config.store.dataset, "staging");
        // Unset fields keep their defaults
        assert_eq!(config.store.api_version, "2023-08-01");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "localhost");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "site:\n  title: From File").unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.site.title, "From File");
    }

    #[test]
    fn test_query_endpoint() {
        let store = StoreConfig {
            project_id: "abc123".to_string(),
            ..Default::default()
        };
        assert_eq!(
            store.query_endpoint(),
            "https://abc123.api.sanity.io/v2023-08-01/data/query/production"
        );
    }

    #[test]
    fn test_query_endpoint_with_base_url() {
        let store = StoreConfig {
            base_url: Some("http://127.0.0.1:8123/".to_string()),
            dataset: "test".to_string(),
            ..Default::default()
        };
        assert_eq!(
            store.query_endpoint(),
            "http://127.0.0.1:8123/v2023-08-01/data/query/test"
        );
    }
}
