use std::path::PathBuf;

use bodycomp_core::export::{default_filename, to_csv, to_json};
use bodycomp_core::EntryStore;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::ui::{badge, print, receipt, Badge};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format = args.format.trim().to_ascii_lowercase();
    if format != "csv" && format != "json" {
        return Err(CliError::invalid_input_with_hint(
            format!("Unsupported export format: {}", args.format),
            "Hint: Use --format csv or --format json.",
        )
        .into());
    }

    let store = ctx.open_store()?;
    let entries = store.load();
    if entries.is_empty() {
        if !ctx.quiet() {
            let ui = ctx.ui_context(false, None);
            eprintln!("{}", badge(&ui, Badge::Warn, "Nothing to export"));
        }
        return Ok(());
    }

    let contents = if format == "csv" {
        to_csv(&entries)?
    } else {
        to_json(&entries)?
    };

    let Some(output) = args.output.as_deref() else {
        print!("{}", contents);
        if !contents.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    let mut path = PathBuf::from(output);
    if path.is_dir() {
        path = path.join(default_filename(ctx.today()?, &format));
    }
    std::fs::write(&path, contents.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), count = entries.len(), "exported entries");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let path_display = path.display().to_string();
        let count = entries.len().to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Exported",
                &[("File", path_display.as_str()), ("Entries", count.as_str())],
            ),
        );
    }
    Ok(())
}
