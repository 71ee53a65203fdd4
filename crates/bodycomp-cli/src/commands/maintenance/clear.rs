use bodycomp_core::clear_all_entries;

use crate::app::AppContext;
use crate::cli::ConfirmArgs;
use crate::helpers::confirm;
use crate::ui::{print, receipt};

pub fn handle_clear(ctx: &AppContext, args: &ConfirmArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    if !confirm("Delete all entries? This cannot be undone.", args.yes)? {
        return Ok(());
    }
    clear_all_entries(&mut store)?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        let path = store.path().display().to_string();
        print(&ui, &receipt(&ui, "Cleared all entries", &[("Store", path.as_str())]));
    }
    Ok(())
}
