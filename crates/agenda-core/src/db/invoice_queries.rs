//! Invoice persistence and read queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};
use rust_decimal::Decimal;

use crate::{
    billing::NewInvoice,
    error::{AgendaError, DatabaseResultExt, Result},
    models::{Invoice, PaymentMethod},
};

const INSERT_INVOICE_SQL: &str = "INSERT INTO invoices (client_name, dni, ruc, email, payment_method, total_price, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const INSERT_INVOICE_PRODUCT_SQL: &str =
    "INSERT INTO invoice_products (invoice_id, product_id, position) VALUES (?1, ?2, ?3)";
const SELECT_INVOICE_SQL: &str = "SELECT id, client_name, dni, ruc, email, payment_method, total_price, created_at FROM invoices WHERE id = ?1";
const SELECT_ALL_INVOICES_SQL: &str = "SELECT id, client_name, dni, ruc, email, payment_method, total_price, created_at FROM invoices ORDER BY id";
const SELECT_INVOICE_PRODUCTS_SQL: &str =
    "SELECT product_id FROM invoice_products WHERE invoice_id = ?1 ORDER BY position";

impl super::Database {
    /// Helper to construct an Invoice (without product ids) from a row.
    fn build_invoice_from_row(row: &rusqlite::Row) -> rusqlite::Result<Invoice> {
        let method_str: String = row.get(5)?;
        let payment_method = method_str.parse::<PaymentMethod>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid payment method: {method_str}").into(),
            )
        })?;

        Ok(Invoice {
            id: row.get::<_, i64>(0)? as u64,
            client_name: row.get(1)?,
            dni: row.get(2)?,
            ruc: row.get(3)?,
            email: row.get(4)?,
            payment_method,
            product_ids: Vec::new(),
            total_price: row.get::<_, String>(6)?.parse::<Decimal>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            created_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Persists a finalized invoice and its product references atomically.
    ///
    /// The total is taken as-is from the builder; it was computed from the
    /// selection at build time and is frozen here.
    pub fn create_invoice(&mut self, new_invoice: &NewInvoice) -> Result<Invoice> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_INVOICE_SQL,
            params![
                &new_invoice.client_name,
                &new_invoice.dni,
                new_invoice.ruc.as_deref(),
                &new_invoice.email,
                new_invoice.payment_method.as_str(),
                new_invoice.total_price.to_string(),
                &now_str
            ],
        )
        .map_err(|e| AgendaError::database_error("Failed to insert invoice", e))?;

        let id = tx.last_insert_rowid() as u64;

        for (position, product_id) in new_invoice.product_ids.iter().enumerate() {
            tx.execute(
                INSERT_INVOICE_PRODUCT_SQL,
                params![id as i64, *product_id as i64, position as i64],
            )
            .map_err(|e| AgendaError::database_error("Failed to insert invoice product", e))?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Invoice {
            id,
            client_name: new_invoice.client_name.clone(),
            dni: new_invoice.dni.clone(),
            ruc: new_invoice.ruc.clone(),
            email: new_invoice.email.clone(),
            payment_method: new_invoice.payment_method,
            product_ids: new_invoice.product_ids.clone(),
            total_price: new_invoice.total_price,
            created_at: now,
        })
    }

    /// Retrieves an invoice by its ID, with product references loaded.
    pub fn get_invoice(&self, id: u64) -> Result<Option<Invoice>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_INVOICE_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let mut invoice = stmt
            .query_row(params![id as i64], Self::build_invoice_from_row)
            .optional()
            .map_err(|e| AgendaError::database_error("Failed to query invoice", e))?;

        if let Some(ref mut invoice) = invoice {
            invoice.product_ids = self.get_invoice_product_ids(invoice.id)?;
        }

        Ok(invoice)
    }

    /// Lists all invoices in storage order, with product references loaded.
    pub fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_INVOICES_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let mut invoices: Vec<Invoice> = stmt
            .query_map([], Self::build_invoice_from_row)
            .map_err(|e| AgendaError::database_error("Failed to query invoices", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AgendaError::database_error("Failed to fetch invoices", e))?;

        for invoice in &mut invoices {
            invoice.product_ids = self.get_invoice_product_ids(invoice.id)?;
        }

        Ok(invoices)
    }

    fn get_invoice_product_ids(&self, invoice_id: u64) -> Result<Vec<u64>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_INVOICE_PRODUCTS_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let product_ids = stmt
            .query_map(params![invoice_id as i64], |row| {
                row.get::<_, i64>(0).map(|id| id as u64)
            })
            .map_err(|e| AgendaError::database_error("Failed to query invoice products", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AgendaError::database_error("Failed to fetch invoice products", e))?;

        Ok(product_ids)
    }
}
