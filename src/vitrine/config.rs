use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_PRODUCTS_URL: &str = "http://localhost:3001";
const DEFAULT_CATALOG_URL: &str = "http://localhost:3002";
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_LOAD_DELAY_MS: u64 = 300;

/// Configuration for vitrine, stored in the user's config dir as
/// `config.json`. Environment variables override the file (the storefront
/// frontends configure their base URLs the same way), and CLI flags override
/// both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitrineConfig {
    /// Base URL of the products service
    #[serde(default = "default_products_url")]
    pub products_url: String,

    /// Base URL of the category/brand service
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Products exposed per page-window increment
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated load-more delay in milliseconds
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

fn default_products_url() -> String {
    DEFAULT_PRODUCTS_URL.to_string()
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_load_delay_ms() -> u64 {
    DEFAULT_LOAD_DELAY_MS
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            products_url: default_products_url(),
            catalog_url: default_catalog_url(),
            page_size: DEFAULT_PAGE_SIZE,
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
        }
    }
}

impl VitrineConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VitrineConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Apply `VITRINE_PRODUCTS_URL` / `VITRINE_CATALOG_URL` overrides.
    pub fn overridden_from_env(mut self) -> Self {
        if let Ok(url) = std::env::var("VITRINE_PRODUCTS_URL") {
            if !url.is_empty() {
                self.products_url = url;
            }
        }
        if let Ok(url) = std::env::var("VITRINE_CATALOG_URL") {
            if !url.is_empty() {
                self.catalog_url = url;
            }
        }
        self
    }
}
