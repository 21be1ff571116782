//! High-level scheduling API for appointments, invoices, and the catalog.
//!
//! This module provides the main [`Scheduler`] interface for interacting
//! with the agenda. The scheduler coordinates between the interface layers
//! and the database, implementing the business logic for booking, billing,
//! and catalog operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Interfaces    │    │   Operations    │    │    Database     │
//! │ (CLI, booking   │───▶│ (appointment_,  │───▶│   (via db/)     │
//! │  form)          │    │  invoice_ops)   │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Scheduler`] instances with configuration
//! - [`appointment_ops`]: Appointment booking, listing, update, and deletion
//! - [`invoice_ops`]: Invoice persistence and retrieval
//! - [`product_ops`]: Catalog management
//! - [`cache`]: Client-side appointment cache with derived views
//!
//! All operations are async; each one opens its own connection on a blocking
//! thread, so a `Scheduler` can be shared freely across tasks.
//!
//! # Usage
//!
//! ```rust
//! use agenda_core::{SchedulerBuilder, params::CreateProduct};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("/tmp/agenda.db"))
//!     .build()
//!     .await?;
//!
//! let product = scheduler
//!     .create_product(&CreateProduct {
//!         title: "Manicura Francesa".to_string(),
//!         description: None,
//!         category: "Clásicas".to_string(),
//!         kind: "Manicure".to_string(),
//!         price: "60".to_string(),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod appointment_ops;
pub mod builder;
pub mod cache;
pub mod invoice_ops;
pub mod product_ops;


pub use builder::SchedulerBuilder;
pub use cache::AppointmentCache;

/// Main scheduling interface for appointments, invoices, and the catalog.
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
}

impl Scheduler {
    /// Creates a new scheduler with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
