use std::io::{self, IsTerminal};

use bodycomp_core::{save_entry, Saved};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::resolve_measurement;
use crate::ui::{format_date, print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let interactive = !args.no_input && io::stdin().is_terminal();
    let today = ctx.today()?;
    let measurement = resolve_measurement(&args.values, None, today, interactive)?;

    let mut store = ctx.open_store()?;
    let saved = save_entry(&mut store, &measurement)?;

    if ctx.quiet() {
        println!("{}", saved.entry().id);
        return Ok(());
    }
    let title = match saved {
        Saved::Created(_) => "Saved",
        Saved::Replaced(_) => "Replaced entry for this date",
    };
    let entry = saved.entry();
    let ui = ctx.ui_context(false, None);
    let date = format_date(&entry.date, false);
    print(
        &ui,
        &receipt(&ui, title, &[("ID", entry.id.as_str()), ("Date", date.as_str())]),
    );
    Ok(())
}
