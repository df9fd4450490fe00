//! Configuration management for the Newsdesk search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{NewsdeskError, Result};
use crate::core::types::SearchDomain;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub content_store: ContentStoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upstream content API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentStoreConfig {
    /// Base URL of the headless CMS (without the `/api` suffix)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP client timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,

    /// Maximum documents requested per collection
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,

    /// Collections feeding each search domain
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
}

/// One upstream collection feeding a domain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceConfig {
    /// Collection slug, e.g. `articles`
    pub collection: String,

    /// Domain the collection contributes to
    pub domain: SearchDomain,

    /// Treat every item of this collection as an opinion piece
    #[serde(default)]
    pub opinion: bool,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results per page when `pageSize` is absent
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound for `pageSize`
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Maximum query string length (characters, after trimming)
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,

    /// Characters of body text in each result preview
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3050
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_fetch_limit() -> usize {
    200
}

fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            collection: "articles".to_string(),
            domain: SearchDomain::Articles,
            opinion: false,
        },
        SourceConfig {
            collection: "external-links".to_string(),
            domain: SearchDomain::External,
            opinion: false,
        },
    ]
}

fn default_page_size() -> usize {
    15
}

fn default_max_page_size() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_preview_length() -> usize {
    200
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ContentStoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_sec: default_timeout(),
            fetch_limit: default_fetch_limit(),
            sources: default_sources(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            max_query_length: default_max_query_length(),
            preview_length: default_preview_length(),
        }
    }
}

impl ContentStoreConfig {
    /// Sources configured for a domain, in declaration order
    pub fn sources_for(&self, domain: SearchDomain) -> Vec<SourceConfig> {
        self.sources
            .iter()
            .filter(|s| s.domain == domain)
            .cloned()
            .collect()
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| NewsdeskError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Default location of the user config file
    /// (`~/.config/newsdesk/config.toml` on Linux)
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("newsdesk").join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `explicit` path (CLI flag) or NEWSDESK_CONFIG env var
    /// 2. User config file (`dirs::config_dir()/newsdesk/config.toml`)
    /// 3. ./newsdesk.toml
    /// 4. Defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(path) = env::var("NEWSDESK_CONFIG") {
            Self::from_file(path)?
        } else if let Some(user) = Self::user_config_file().filter(|p| p.exists()) {
            Self::from_file(user)?
        } else if Path::new("newsdesk.toml").exists() {
            Self::from_file("newsdesk.toml")?
        } else {
            Self::default()
        };

        // Override with environment variables
        config.merge_env();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("NEWSDESK_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("NEWSDESK_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Content store configuration
        if let Ok(url) = env::var("NEWSDESK_CONTENT_API_URL") {
            self.content_store.base_url = url;
        }
        if let Ok(timeout) = env::var("NEWSDESK_CONTENT_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.content_store.timeout_sec = t;
            }
        }
        if let Ok(limit) = env::var("NEWSDESK_FETCH_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.content_store.fetch_limit = l;
            }
        }

        // Search configuration
        if let Ok(size) = env::var("NEWSDESK_DEFAULT_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.search.default_page_size = s;
            }
        }
        if let Ok(size) = env::var("NEWSDESK_MAX_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.search.max_page_size = s;
            }
        }
        if let Ok(len) = env::var("NEWSDESK_MAX_QUERY_LENGTH") {
            if let Ok(l) = len.parse() {
                self.search.max_query_length = l;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Validate content store config
        let base = url::Url::parse(&self.content_store.base_url).map_err(|e| {
            NewsdeskError::ConfigError(format!(
                "Invalid content store URL '{}': {e}",
                self.content_store.base_url
            ))
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(NewsdeskError::ConfigError(format!(
                "Content store URL must be http(s), got '{}'",
                base.scheme()
            )));
        }

        if self.content_store.timeout_sec == 0 {
            return Err(NewsdeskError::ConfigError(
                "Content store timeout must be non-zero".to_string(),
            ));
        }

        if self.content_store.fetch_limit == 0 {
            return Err(NewsdeskError::ConfigError(
                "Fetch limit must be non-zero".to_string(),
            ));
        }

        for domain in [SearchDomain::Articles, SearchDomain::External] {
            if self.content_store.sources_for(domain).is_empty() {
                return Err(NewsdeskError::ConfigError(format!(
                    "No content source configured for domain '{domain}'"
                )));
            }
        }

        if let Some(source) = self
            .content_store
            .sources
            .iter()
            .find(|s| s.collection.trim().is_empty())
        {
            return Err(NewsdeskError::ConfigError(format!(
                "Empty collection name for domain '{}'",
                source.domain
            )));
        }

        // Validate search config
        if self.search.default_page_size == 0 {
            return Err(NewsdeskError::ConfigError(
                "Default page size must be non-zero".to_string(),
            ));
        }

        if self.search.default_page_size > self.search.max_page_size {
            return Err(NewsdeskError::ConfigError(
                "Default page size cannot exceed max page size".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(NewsdeskError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Content store: {}", self.content_store.base_url);
        tracing::info!("  Content timeout: {}s", self.content_store.timeout_sec);
        tracing::info!("  Fetch limit: {}", self.content_store.fetch_limit);
        for source in &self.content_store.sources {
            tracing::info!(
                "  Source: {} -> {}{}",
                source.collection,
                source.domain,
                if source.opinion { " (opinion)" } else { "" }
            );
        }
        tracing::info!("  Default page size: {}", self.search.default_page_size);
        tracing::info!("  Max page size: {}", self.search.max_page_size);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Preview length: {} chars", self.search.preview_length);
    }
}
