use bodycomp_core::delete_entry;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{print, receipt};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    if !confirm(&format!("Delete entry {}?", args.id), args.yes)? {
        return Ok(());
    }

    let mut store = ctx.open_store()?;
    if !delete_entry(&mut store, &args.id)? {
        return Err(CliError::not_found(
            format!("Entry not found: {}", args.id),
            "Hint: Run `bodycomp list` to find entry IDs.",
        )
        .into());
    }

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(&ui, &receipt(&ui, "Deleted", &[("ID", args.id.as_str())]));
    }
    Ok(())
}
