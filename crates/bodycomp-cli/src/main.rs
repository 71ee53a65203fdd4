//! Bodycomp CLI - a local body-composition tracker
//!
//! Logs body-scan measurements, shows the latest values with their change
//! since the previous scan, and exports the history.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use bodycomp_core::VERSION;
use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{entries, init, insights, maintenance, misc};
use crate::errors::exit_code_for;
use crate::ui::{print_error, UiContext};

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = UiContext::for_stderr(cli.no_color, cli.ascii);
        let (message, hint) = split_error_hint(&format!("{}", e));
        tracing::debug!(error = ?e, "command failed");
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_error_hint(error: &str) -> (String, Option<String>) {
    match error.find("\nHint:") {
        Some(idx) => (
            error[..idx].to_string(),
            Some(error[idx + "\nHint:".len()..].trim().to_string()),
        ),
        None => (error.to_string(), None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => entries::handle_add(ctx, args)?,
        Some(Commands::Edit(args)) => entries::handle_edit(ctx, args)?,
        Some(Commands::Delete(args)) => entries::handle_delete(ctx, args)?,
        Some(Commands::List(args)) => entries::handle_list(ctx, args)?,
        Some(Commands::Export(args)) => entries::handle_export(ctx, args)?,
        Some(Commands::Summary(args)) => insights::handle_summary(ctx, args)?,
        Some(Commands::History(args)) => insights::handle_history(ctx, args)?,
        Some(Commands::Clear(args)) => maintenance::handle_clear(ctx, args)?,
        Some(Commands::Seed(args)) => maintenance::handle_seed(ctx, args)?,
        Some(Commands::Check) => maintenance::handle_check(ctx)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Bodycomp v{}", VERSION);
            println!("\nQuickstart:");
            println!("  bodycomp init --seed");
            println!("  bodycomp add --weight 82.4 --muscle 38.1 --fat-mass 14.2 --fat-percent 17.2");
            println!("  bodycomp summary");
            println!("  bodycomp history --range 6m");
            println!("  bodycomp export --output .");
            println!("\nRun `bodycomp --help` for full usage.");
        }
    }

    Ok(())
}
