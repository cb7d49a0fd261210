//! postboard: a server-rendered posts page backed by a headless content store
//!
//! This crate fetches post documents from a remote content store and renders
//! them into an HTML listing with embedded Tera templates.

pub mod commands;
pub mod config;
pub mod content;
pub mod render;
pub mod server;
pub mod store;

use anyhow::Result;
use std::path::Path;

/// The main postboard application
#[derive(Clone)]
pub struct Postboard {
    /// Application configuration
    pub config: config::AppConfig,
}

impl Postboard {
    /// Create a new instance, loading configuration from the given file,
    /// from `postboard.yml` in the current directory, or from defaults.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => config::AppConfig::load(path)?,
            None => {
                let default_path = Path::new("postboard.yml");
                if default_path.exists() {
                    config::AppConfig::load(default_path)?
                } else {
                    config::AppConfig::default()
                }
            }
        };

        Ok(Self {
            config: config.with_env_overrides(),
        })
    }

    /// Build a content store client from the loaded configuration
    pub fn store(&self) -> store::Result<store::ContentStore> {
        store::ContentStore::new(&self.config.store)
    }
}
