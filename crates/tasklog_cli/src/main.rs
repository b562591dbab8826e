//! Tasklog CLI
//!
//! Command-line front end for a practice-problem ledger stored in a flat
//! record file.
//!
//! # Commands
//!
//! - `list` - Show all problems, easiest first
//! - `show` - Show one problem
//! - `add` - Record a new problem
//! - `update` - Change the theme, notes or an attempt flag of a problem
//! - `delete` - Remove a problem

mod commands;

use clap::{Parser, Subcommand};
use commands::Format;
use std::path::PathBuf;
use tasklog_core::{Config, NewRecord, RecordStore};
use tracing_subscriber::EnvFilter;

/// Practice-problem ledger.
#[derive(Parser)]
#[command(name = "tasklog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the record file
    #[arg(global = true, short, long, default_value = "tasks.csv")]
    file: PathBuf,

    /// Output format
    #[arg(global = true, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Skip fsync after writes
    #[arg(global = true, long)]
    no_sync: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all problems, easiest first
    List,

    /// Show one problem
    Show {
        /// Problem number
        number: String,
    },

    /// Record a new problem
    Add {
        /// Problem title
        #[arg(short, long)]
        title: String,

        /// Easy, Medium or Hard
        #[arg(short, long, default_value = "Easy")]
        difficulty: String,

        /// Reference link
        #[arg(short, long, default_value = "")]
        link: String,

        /// Theme, e.g. "Two Pointers"
        #[arg(long, default_value = "")]
        theme: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Change the theme, notes or an attempt flag of a problem
    Update {
        /// Problem number
        number: String,

        /// theme, notes, attempt_1, attempt_2 or attempt_3
        field: String,

        /// New value (0/1 or true/false for attempt flags)
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a problem
    Delete {
        /// Problem number
        number: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Commands::Version = cli.command {
        println!("Tasklog CLI v{}", env!("CARGO_PKG_VERSION"));
        println!("Tasklog Core v{}", tasklog_core::VERSION);
        return Ok(());
    }

    let config = Config::new().sync_on_write(!cli.no_sync);
    let store = RecordStore::open_with_config(&cli.file, config)?;

    match cli.command {
        Commands::List => commands::list::run(&store, cli.format)?,
        Commands::Show { number } => commands::list::show(&store, &number, cli.format)?,
        Commands::Add {
            title,
            difficulty,
            link,
            theme,
            notes,
        } => {
            let new = NewRecord::new(title, difficulty)
                .link(link)
                .theme(theme)
                .notes(notes);
            commands::add::run(&store, new, cli.format)?;
        }
        Commands::Update {
            number,
            field,
            value,
        } => commands::update::run(&store, &number, &field, &value, cli.format)?,
        Commands::Delete { number } => commands::delete::run(&store, &number, cli.format)?,
        Commands::Version => {}
    }

    Ok(())
}
