use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use daybook::cli::{
    handle_add, handle_edit, handle_export, handle_list, handle_remove, handle_stats,
};
use daybook::config::DaybookPaths;
use daybook::models::EntryInput;
use daybook::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "daybook",
    version,
    about = "Date-keyed income/expense tracker for the terminal",
    long_about = "daybook records one income/expense entry per calendar date, \
                  shows monthly aggregate statistics, and exports your data \
                  as CSV. Data lives in a single JSON file on disk."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new entry
    Add {
        /// Entry date (YYYY-MM-DD); at most one entry per date
        date: String,
        /// Income for the day
        income: String,
        /// Expenses for the day
        expenses: String,
    },

    /// List all entries, newest first, with the current-month summary
    #[command(alias = "ls")]
    List,

    /// Show monthly statistics
    Stats {
        /// Month to summarize (1-12); defaults to the current month
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },

    /// Remove an entry by its position in the list
    #[command(alias = "rm")]
    Remove {
        /// 1-based position as shown by `list`
        position: usize,
    },

    /// Replace an entry's values by its position in the list
    Edit {
        /// 1-based position as shown by `list`
        position: usize,
        /// New entry date (YYYY-MM-DD)
        date: String,
        /// New income
        income: String,
        /// New expenses
        expenses: String,
    },

    /// Export all entries to a CSV file
    Export {
        /// Output file path
        output: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DaybookPaths::new()?;
    let mut store = RecordStore::from_paths(&paths)?;

    match cli.command {
        Some(Commands::Add {
            date,
            income,
            expenses,
        }) => {
            handle_add(&mut store, EntryInput::new(date, income, expenses))?;
        }
        Some(Commands::List) => {
            handle_list(&store)?;
        }
        Some(Commands::Stats { month }) => {
            handle_stats(&store, month)?;
        }
        Some(Commands::Remove { position }) => {
            handle_remove(&mut store, position)?;
        }
        Some(Commands::Edit {
            position,
            date,
            income,
            expenses,
        }) => {
            handle_edit(&mut store, position, EntryInput::new(date, income, expenses))?;
        }
        Some(Commands::Export { output }) => {
            handle_export(&store, output)?;
        }
        Some(Commands::Config) => {
            println!("daybook configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Entries file:   {}", paths.entries_file().display());
            println!();
            println!("Entries stored: {}", store.len());
        }
        None => {
            println!("daybook - date-keyed income/expense tracker");
            println!();
            println!("Run 'daybook --help' for usage information.");
            println!("Run 'daybook list' to see your entries.");
        }
    }

    Ok(())
}
