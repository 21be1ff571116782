//! Agenda CLI Application
//!
//! Command-line interface for the agenda scheduling tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use agenda_core::SchedulerBuilder;
use clap::Parser;
use cli::{Cli, ListAppointmentsArgs};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Agenda started");

    match command {
        Some(Appointment { command }) => {
            Cli::new(scheduler, renderer)
                .handle_appointment_command(command)
                .await
        }
        Some(Invoice { command }) => {
            Cli::new(scheduler, renderer)
                .handle_invoice_command(command)
                .await
        }
        Some(Product { command }) => {
            Cli::new(scheduler, renderer)
                .handle_product_command(command)
                .await
        }
        None => {
            Cli::new(scheduler, renderer)
                .list_appointments(ListAppointmentsArgs {
                    client: None,
                    from: None,
                    to: None,
                })
                .await
        }
    }
}
