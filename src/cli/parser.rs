use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rworklog
/// CLI application to track work hours and mileage with SQLite
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work logging CLI: track hours and kilometers per billing period using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Run configuration file migrations if needed")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or update the work session for a date
    Add {
        /// Date of the work session (YYYY-MM-DD)
        date: String,

        /// Start of work (HH:MM)
        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: String,

        /// End of work (HH:MM)
        #[arg(long = "out", help = "End time (HH:MM)")]
        end: String,

        /// Work location label; travel distance is resolved from it
        #[arg(long = "loc", help = "Location label (default taken from config)")]
        location: Option<String>,
    },

    /// Delete a work entry by date, or a period summary by id
    Del {
        /// Date of the entry to delete (YYYY-MM-DD)
        date: Option<String>,

        #[arg(
            long = "summary",
            help = "Id of the period summary to delete instead of an entry"
        )]
        summary: Option<i64>,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List work entries or archived period summaries
    List {
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (e.g. 2025-04 or 2025-01:2025-03)"
        )]
        period: Option<String>,

        #[arg(long = "all", help = "List every entry, not just the current period")]
        all: bool,

        #[arg(long = "summaries", help = "List archived period summaries")]
        summaries: bool,
    },

    /// Show current-period totals and boundary dates
    Status,

    /// Close the current billing period and archive its summary
    Reset {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export work entries or period summaries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "summaries", help = "Export period summaries instead of entries")]
        summaries: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
