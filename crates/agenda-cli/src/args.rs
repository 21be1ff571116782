use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AppointmentCommands, InvoiceCommands, ProductCommands};

/// Main command-line interface for the Agenda scheduling tool
///
/// Agenda manages the day-to-day of a small personal-care studio: booking
/// client appointments into fixed time slots, maintaining the design
/// catalog, and creating invoices from selected catalog products.
#[derive(Parser)]
#[command(version, about, name = "agenda")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/agenda/agenda.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Agenda CLI
///
/// The CLI is organized into three main command categories:
/// - `appointment`: Book, list, update, and delete appointments
/// - `invoice`: Create and inspect invoices
/// - `product`: Manage the design catalog
#[derive(Subcommand)]
pub enum Commands {
    /// Manage appointments
    #[command(alias = "a")]
    Appointment {
        #[command(subcommand)]
        command: AppointmentCommands,
    },
    /// Manage invoices
    #[command(alias = "i")]
    Invoice {
        #[command(subcommand)]
        command: InvoiceCommands,
    },
    /// Manage the product catalog
    #[command(alias = "p")]
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },
}
