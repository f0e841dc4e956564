//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use gaming_auth::LocalIdentityProvider;
use gaming_cache::{Cache, FileStore, SharedStore};
use gaming_commerce::prelude::*;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Catalog, cart and identity.
    pub shop: Storefront<LocalIdentityProvider>,
    notes: Arc<RecordingSink>,
}

impl Context {
    /// Load the config file, or find one in the directory tree.
    pub fn load_config(config_path: Option<&str>) -> Result<(CliConfig, PathBuf)> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(Path::new(path))?,
            None => match Self::find_config(&cwd) {
                Some(path) => CliConfig::load(&path)?,
                None => CliConfig::default(),
            },
        };
        Ok((config, cwd))
    }

    /// Open the storefront described by `config`.
    pub fn open(config: CliConfig, cwd: &Path, output: Output) -> Result<Self> {
        let dir = resolve_path(cwd, &config.storage.dir);
        let store: SharedStore = Arc::new(
            FileStore::open(&dir)
                .with_context(|| format!("Failed to open data directory: {}", dir.display()))?,
        );
        tracing::debug!(dir = %dir.display(), "data directory opened");

        let catalog = match &config.storage.catalog {
            Some(path) => {
                let path = resolve_path(cwd, path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))?
            }
            None => Catalog::builtin(),
        };
        tracing::debug!(products = catalog.len(), "catalog loaded");

        let identity = LocalIdentityProvider::new(Cache::new(store.clone()))
            .with_admin_emails(config.auth.admin_emails.iter().cloned());

        let notes = Arc::new(RecordingSink::new());
        let options = StorefrontOptions {
            catalog,
            cart_key: config.storage.cart_key.clone(),
        };
        let shop = Storefront::open(options, store, identity, notes.clone());

        Ok(Self {
            config,
            output,
            shop,
            notes,
        })
    }

    /// Print notifications raised so far.
    pub fn flush_notifications(&self) {
        for note in self.notes.drain() {
            self.output.notification(&note);
        }
    }

    /// Print pending notifications and close the storefront.
    pub fn finish(self) {
        self.flush_notifications();
        self.shop.shutdown();
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    if Path::new(path).is_absolute() {
        PathBuf::from(path)
    } else {
        cwd.join(path)
    }
}
