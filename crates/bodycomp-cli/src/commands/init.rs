use std::path::PathBuf;

use bodycomp_core::{seed_if_uninitialized, EntryStore, JsonFileStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, BodycompConfig};
use crate::errors::CliError;
use crate::helpers::{parse_range, parse_timezone};
use crate::ui::{hint, print, receipt};

/// Write the config file and create the entry store.
///
/// An existing store is never overwritten; `--seed` only seeds a store that
/// has never been written.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = match args.config_path.as_deref() {
        Some(path) => PathBuf::from(path),
        None => resolve_config_path()?,
    };
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }

    // Validate before touching the filesystem.
    let timezone = match args.timezone.as_deref() {
        Some(value) => Some(parse_timezone(value)?.to_string()),
        None => None,
    };
    let default_range = match args.default_range.as_deref() {
        Some(value) => Some(parse_range(value)?.as_str().to_string()),
        None => None,
    };

    let store_path = match args.path.as_deref().or(ctx.cli().store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };

    let mut store = JsonFileStore::new(&store_path);
    let seeded = if args.seed {
        seed_if_uninitialized(&mut store)?.map(|entries| entries.len())
    } else {
        if !store.exists() {
            store.replace_all(&[])?;
        }
        None
    };

    let config = BodycompConfig::new(store_path.clone(), timezone, default_range);
    write_config(&config_path, &config)?;
    tracing::info!(
        config = %config_path.display(),
        store = %store_path.display(),
        "initialized bodycomp"
    );

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let config_display = config_path.display().to_string();
    let store_display = store_path.display().to_string();
    let mut items = vec![("Config", config_display.as_str()), ("Store", store_display.as_str())];
    let seeded_display = seeded.map(|n| n.to_string());
    if let Some(count) = seeded_display.as_deref() {
        items.push(("Seeded", count));
    }
    print(&ui, &receipt(&ui, "Initialized", &items));
    if args.seed && seeded.is_none() {
        print(
            &ui,
            &hint(&ui, "Store already had data; run `bodycomp seed` to replace it."),
        );
    }
    Ok(())
}
