use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nosh", about = concat!("nosh v", env!("CARGO_PKG_VERSION"), " - a food diary that lives in plain text"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different diary directory
    #[arg(short = 'C', long = "diary-dir", global = true)]
    pub diary_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new diary in the current directory
    Init(InitArgs),
    /// Show diary entries for a range of days
    Show(ShowArgs),
    /// Set what you ate for a meal
    Set(SetArgs),
    /// List food suggestions, optionally filtered
    Suggest(SuggestArgs),
    /// Search diary entries by regex
    Search(SearchArgs),
}

// ---------------------------------------------------------------------------
// Init args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct InitArgs {
    /// Diary name (default: inferred from directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Rewrite nosh.toml even if it already exists
    #[arg(long)]
    pub force: bool,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ShowArgs {
    /// First day to show: YYYY-MM-DD, today, tomorrow, or yesterday (default: today)
    pub date: Option<String>,
    /// Number of days to show (default: days_to_display from nosh.toml)
    #[arg(long)]
    pub days: Option<usize>,
}

#[derive(Args)]
pub struct SuggestArgs {
    /// Filter text (if omitted, lists the whole pool)
    pub query: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Regex pattern to search for (case-insensitive)
    pub pattern: String,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct SetArgs {
    /// Meal to set (e.g. Lunch)
    pub meal: String,
    /// What you ate (an empty string clears the meal)
    pub value: String,
    /// Day to write to: YYYY-MM-DD, today, tomorrow, or yesterday (default: today)
    #[arg(long)]
    pub date: Option<String>,
}
