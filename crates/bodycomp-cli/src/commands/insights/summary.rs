use bodycomp_core::{summarize, EntryStore};

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::helpers::parse_output_format;
use crate::output::print_summary;

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let store = ctx.open_store()?;
    let summary = summarize(&store.load());

    let ui = ctx.ui_context(args.json, format);
    print_summary(ui, &summary, ctx.quiet())
}
