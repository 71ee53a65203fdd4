use bodycomp_core::{filter_by_range, EntryStore};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_output_format;
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let range = ctx.range(args.range.as_deref())?;
    let today = ctx.today()?;

    let store = ctx.open_store()?;
    let mut entries = filter_by_range(&store.load(), range, today);
    entries.reverse();
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    let ui = ctx.ui_context(args.json, format);
    print_entry_list(ui, &entries, range, ctx.quiet())
}
