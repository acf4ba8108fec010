//! CLI context and configuration.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use fithaven_storefront::{Storefront, StorefrontConfig};

use crate::output::Output;

/// CLI context passed to all commands.
pub struct Context {
    /// Loaded configuration.
    pub config: StorefrontConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Current working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or the nearest one above
    /// the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = StorefrontConfig::load(&path)
                    .with_context(|| format!("Failed to load config from {}", path.display()))?;
                (config, Some(path))
            }
            None => StorefrontConfig::discover(&cwd).context("Failed to load config")?,
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Start a storefront session over the built-in catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        Storefront::with_fixtures(self.config.clone()).context("Failed to open storefront")
    }
}
