use bodycomp_core::reset_to_seed_data;

use crate::app::AppContext;
use crate::cli::ConfirmArgs;
use crate::helpers::confirm;
use crate::ui::{print, receipt};

pub fn handle_seed(ctx: &AppContext, args: &ConfirmArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    if !confirm("Replace all entries with the sample scans?", args.yes)? {
        return Ok(());
    }
    let entries = reset_to_seed_data(&mut store)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let count = entries.len().to_string();
        print(&ui, &receipt(&ui, "Reset to sample data", &[("Entries", count.as_str())]));
    }
    Ok(())
}
