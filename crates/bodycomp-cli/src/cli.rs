use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use bodycomp_core::VERSION;

/// Bodycomp - track body-composition scans from the command line
#[derive(Parser)]
#[command(name = "bodycomp")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the entry store (JSON file)
    #[arg(short, long, global = true, env = "BODYCOMP_STORE")]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Path where the entry store will be created
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Populate the new store with the historical sample scans
    #[arg(long)]
    pub seed: bool,

    /// Timezone used to decide "today" (e.g. Europe/London)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Default time range for list and history (3m, 6m, 1y, all)
    #[arg(long)]
    pub default_range: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Config path override
    #[arg(long)]
    pub config_path: Option<String>,
}

/// Measurement values shared by `add` and `edit`
#[derive(Args, Default)]
pub struct MeasurementArgs {
    /// Scan date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Body weight in kg
    #[arg(long, value_name = "KG")]
    pub weight: Option<f64>,

    /// Skeletal muscle mass in kg
    #[arg(long, value_name = "KG")]
    pub muscle: Option<f64>,

    /// Body fat mass in kg
    #[arg(long, value_name = "KG")]
    pub fat_mass: Option<f64>,

    /// Body fat percentage
    #[arg(long, value_name = "PERCENT")]
    pub fat_percent: Option<f64>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub values: MeasurementArgs,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub values: MeasurementArgs,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for destructive store-wide commands (`clear`, `seed`)
#[derive(Args)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Time range (3m, 6m, 1y, all)
    #[arg(long)]
    pub range: Option<String>,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Time range (3m, 6m, 1y, all)
    #[arg(long)]
    pub range: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Output format (csv, json)
    #[arg(long, default_value = "csv")]
    pub format: String,

    /// Write to a file instead of stdout (a directory gets the default file name)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the config file and an entry store
    Init(InitArgs),

    /// Log a weigh-in (replaces any entry on the same date)
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Show latest values and change since the previous scan
    Summary(SummaryArgs),

    /// Show the composition series over a time range
    History(HistoryArgs),

    /// Export entries (csv, json)
    Export(ExportArgs),

    /// Delete every entry
    Clear(ConfirmArgs),

    /// Replace all entries with the sample scans
    Seed(ConfirmArgs),

    /// Check the entry store for corruption and duplicate dates
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
