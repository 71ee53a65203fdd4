//! Path resolution for config and store files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, BodycompConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Resolve the config file path, checking BODYCOMP_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the store path from CLI args, then config.
pub fn resolve_store_path(
    cli: &Cli,
    config: Option<&BodycompConfig>,
    config_path: &Path,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    match config {
        Some(config) => Ok(PathBuf::from(&config.store.path)),
        None => Err(CliError::not_found(
            missing_config_message(config_path),
            "Hint: Run `bodycomp init` to create one.",
        )
        .into()),
    }
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No bodycomp config found at {}\n\nRun:\n  bodycomp init\n\nOr specify a store path:\n  BODYCOMP_STORE=/path/to/entries.json bodycomp list",
        config_path.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_flag_wins_over_config() {
        let cli = Cli::parse_from(["bodycomp", "--store", "/tmp/flag.json", "list"]);
        let config = BodycompConfig::new(PathBuf::from("/tmp/config.json"), None, None);
        let path = resolve_store_path(&cli, Some(&config), Path::new("/tmp/c.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/flag.json"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let cli = Cli::parse_from(["bodycomp", "list"]);
        let config = BodycompConfig::new(PathBuf::from("/tmp/config.json"), None, None);
        let path = resolve_store_path(&cli, Some(&config), Path::new("/tmp/c.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/config.json"));
    }

    #[test]
    fn test_missing_everything_is_not_found() {
        let cli = Cli::parse_from(["bodycomp", "list"]);
        let err = resolve_store_path(&cli, None, Path::new("/tmp/c.toml")).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::NotFound { .. }));
    }
}
