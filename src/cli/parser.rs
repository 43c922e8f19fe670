use crate::export::ExportFormat;
use crate::models::table::TableRole;
use clap::{Parser, Subcommand};

/// Command-line interface definition for schedrec
/// CLI application to reconcile two event-schedule spreadsheets
#[derive(Parser)]
#[command(
    name = "schedrec",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconcile a venue-booking export against a second-party schedule and report cancelled or added events",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
    },

    /// Compare two schedule tables and report discrepancies
    Reconcile {
        /// Path to the primary table (the venue-booking export)
        primary: Option<String>,

        /// Path to the secondary table (the second-party schedule)
        secondary: Option<String>,

        #[arg(
            long = "primary-sheet",
            value_name = "NAME",
            help = "Sheet name in the primary workbook (overrides config)"
        )]
        primary_sheet: Option<String>,

        #[arg(
            long = "secondary-sheet",
            value_name = "NAME",
            help = "Sheet name in the secondary workbook (overrides config)"
        )]
        secondary_sheet: Option<String>,

        /// Which table's date span defines the comparison window; the
        /// other table is trimmed to it. Choose the one covering the
        /// shorter range.
        #[arg(long = "window-from", value_enum, default_value = "primary")]
        window_from: TableRole,

        /// Export the report to FILE (format from --format)
        #[arg(long = "out", value_name = "FILE")]
        out: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite an existing export file without asking
        #[arg(long, short = 'f')]
        force: bool,
    },
}
