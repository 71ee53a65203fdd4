use bodycomp_core::{update_entry, EntryStore};

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::resolve_measurement;
use crate::ui::{format_date, format_datetime, print, receipt};

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let existing = store
        .load()
        .into_iter()
        .find(|e| e.id == args.id)
        .ok_or_else(|| {
            CliError::not_found(
                format!("Entry not found: {}", args.id),
                "Hint: Run `bodycomp list` to find entry IDs.",
            )
        })?;

    let base = existing.measurement();
    let measurement = resolve_measurement(&args.values, Some(&base), ctx.today()?, false)?;
    let updated = update_entry(&mut store, &args.id, &measurement).map_err(CliError::from)?;

    if ctx.quiet() {
        return Ok(());
    }
    let ui = ctx.ui_context(false, None);
    let date = format_date(&updated.date, false);
    let created = format_datetime(&updated.created_at, ui.mode.is_pretty());
    print(
        &ui,
        &receipt(
            &ui,
            "Updated",
            &[
                ("ID", updated.id.as_str()),
                ("Date", date.as_str()),
                ("Created", created.as_str()),
            ],
        ),
    );
    Ok(())
}
