use bodycomp_core::{chart_series, filter_by_range, EntryStore};

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::helpers::parse_output_format;
use crate::output::print_history;

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let range = ctx.range(args.range.as_deref())?;
    let today = ctx.today()?;

    let store = ctx.open_store()?;
    let points = chart_series(&filter_by_range(&store.load(), range, today));

    let ui = ctx.ui_context(args.json, format);
    print_history(ui, range, &points, ctx.quiet())
}
