use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spendz")]
#[command(about = "Track personal expenses from the command line", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true, env = "SPENDZ_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new expense
    #[command(alias = "a")]
    Add {
        /// What the money went to (letters and basic punctuation, no digits)
        description: String,

        /// Amount spent, e.g. 12 or 12.50
        amount: String,

        /// Category tag, e.g. Food or Eating-Out
        category: String,

        /// Date in YYYY-MM-DD form (defaults to today)
        date: Option<String>,
    },

    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Filter by a search pattern (regex, or literal text if not valid regex)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Edit one expense by its list position
    #[command(alias = "e")]
    Edit {
        /// Position shown by `spendz list` (1-based)
        position: usize,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(long)]
        amount: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Delete one or more expenses by list position
    #[command(alias = "rm")]
    Delete {
        /// Positions shown by `spendz list` (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<usize>,
    },

    /// Show totals, top category, and a daily spending chart
    #[command(alias = "sum")]
    Summary {
        /// Length of the trailing window in days
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Show, set, or clear the budget threshold
    Budget {
        /// New threshold (omit to show the current one)
        value: Option<f64>,

        /// Remove the threshold
        #[arg(long, conflicts_with = "value")]
        clear: bool,
    },

    /// Show or set display settings (base-currency, rate-eur, rate-gbp)
    Config {
        /// Setting key
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}
