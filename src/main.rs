use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendwatch::cli::{handle_add, handle_clear, handle_export, handle_import, handle_summary};
use spendwatch::config::{SpendPaths, Settings};
use spendwatch::models::CategoryConfig;
use spendwatch::storage::EntryStore;

#[derive(Parser)]
#[command(
    name = "spendwatch",
    version,
    about = "Household spend tracker with billing-period category alerts",
    long_about = "spendwatch logs household spending per store, rolls it up into \
                  category groups over a 16th-to-15th billing period, and warns \
                  when a group's spending goes over its threshold."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a spend entry
    Add {
        /// Store name
        store: String,
        /// Amount spent, e.g. 450 or 450.99
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Entry date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show totals and alerts for the current billing period
    Summary {
        /// Reference date for the period (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Export all entries as CSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Import entries from a CSV file
    Import {
        /// Path to CSV file with Store,Amount,Date columns
        file: PathBuf,
    },

    /// Delete all spend data
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SpendPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let store = EntryStore::new(paths.entries_file());
    store.load()?;

    let config = CategoryConfig::default();

    match cli.command {
        Commands::Add {
            store: store_name,
            amount,
            date,
        } => {
            handle_add(&store, &store_name, &amount, date)?;
        }
        Commands::Summary { date } => {
            handle_summary(&store, &settings, &config, date)?;
        }
        Commands::Export { file } => {
            handle_export(&store, file.as_deref())?;
        }
        Commands::Import { file } => {
            handle_import(&store, &file)?;
        }
        Commands::Clear { yes } => {
            handle_clear(&store, yes)?;
        }
    }

    Ok(())
}
