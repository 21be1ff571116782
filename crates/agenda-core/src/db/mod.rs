//! Database operations and SQLite management for the agenda store.
//!
//! This module provides low-level database operations for appointments,
//! invoices, and the product catalog. It handles SQLite connections, schema
//! management, and per-entity query interfaces.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod appointment_queries;
pub mod invoice_queries;
pub mod migrations;
pub mod product_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
