pub mod add;
pub mod dashboard;
pub mod init;
pub mod list;
pub mod remove;
pub mod status;
pub mod summary;

use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::Result;

#[derive(Parser)]
#[command(name = "penny", about = "Personal income/expense ledger for the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose where Penny keeps its data.
    Init {
        /// Path for Penny data (default: ~/.local/share/penny)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Record a transaction.
    Add {
        /// What the money was for
        #[arg(long)]
        description: String,
        /// Amount, e.g. 12.50
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Category: food, housing, transport, utilities, entertainment,
        /// health, shopping, other
        #[arg(long)]
        category: Option<String>,
        /// income or expense (default: expense)
        #[arg(long)]
        kind: Option<String>,
        /// Date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List all transactions.
    List,
    /// Delete a transaction by id.
    Remove {
        /// Transaction id (see `penny list`)
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Delete every transaction.
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Show totals and the expense breakdown.
    Summary,
    /// Show data location and ledger statistics.
    Status,
}

/// Ask a y/n question on stdin. Anything other than an explicit yes is a no.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} (y/n) ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
