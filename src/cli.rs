use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "gastos")]
#[command(about = "Personal expense ledger with category reports", long_about = None)]
pub struct Cli {
    /// Override Gastos home directory (config/data subdirs will be created inside it).
    #[arg(long, env = "GASTOS_HOME")]
    pub home: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record one expense.
    Add(AddArgs),

    /// Print every recorded expense in insertion order.
    List,

    /// Print per-category totals and the overall total.
    Summary,

    /// Render the two-panel chart and print the detailed statistics.
    Chart(ChartArgs),

    /// Print the suggested category labels.
    Categories,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    pub amount: String,

    /// Expense date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Free-form category label. Defaults to "Other".
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    #[arg(long, short = 'm')]
    pub note: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Output SVG path.
    #[arg(long, default_value = "expense_analysis.svg")]
    pub out: std::path::PathBuf,
}
