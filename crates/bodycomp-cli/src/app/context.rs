//! Application context for the Bodycomp CLI.
//!
//! Bundles CLI arguments with lazily-loaded config so handlers do not
//! re-read the config file or thread paths through every call.

use std::path::PathBuf;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;

use bodycomp_core::{JsonFileStore, TimeRange};

use crate::cli::Cli;
use crate::config::{read_config, BodycompConfig};
use crate::helpers::{parse_range, parse_timezone, today_in, OutputFormat};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_store_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config_path: OnceCell<PathBuf>,
    config: OnceCell<Option<BodycompConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config_path: OnceCell::new(),
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Resolved config file location.
    pub fn config_path(&self) -> anyhow::Result<&PathBuf> {
        self.config_path.get_or_try_init(resolve_config_path)
    }

    /// The config file, if one exists. Loaded on first use.
    pub fn config(&self) -> anyhow::Result<Option<&BodycompConfig>> {
        let config = self.config.get_or_try_init(|| {
            let path = self.config_path()?;
            if path.exists() {
                read_config(path).map(Some)
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    /// Path of the entry store (flag, env, then config).
    pub fn store_path(&self) -> anyhow::Result<PathBuf> {
        let config = self.config()?;
        resolve_store_path(self.cli, config, self.config_path()?)
    }

    /// Open the entry store. The file may not exist yet.
    pub fn open_store(&self) -> anyhow::Result<JsonFileStore> {
        let path = self.store_path()?;
        tracing::debug!(path = %path.display(), "opening entry store");
        Ok(JsonFileStore::new(path))
    }

    /// Today's date in the configured timezone (local time otherwise).
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        let tz = match self.config()?.and_then(|c| c.ui.timezone.as_deref()) {
            Some(name) => Some(parse_timezone(name)?),
            None => None,
        };
        Ok(today_in(tz))
    }

    /// Range from a `--range` flag, falling back to the configured default.
    pub fn range(&self, flag: Option<&str>) -> anyhow::Result<TimeRange> {
        if let Some(value) = flag {
            return parse_range(value);
        }
        match self.config()?.and_then(|c| c.ui.default_range.as_deref()) {
            Some(value) => parse_range(value),
            None => Ok(TimeRange::All),
        }
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
