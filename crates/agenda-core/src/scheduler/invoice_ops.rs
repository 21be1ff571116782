//! Invoice operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    billing::NewInvoice,
    db::Database,
    error::{AgendaError, Result},
    models::Invoice,
    params::Id,
};

impl Scheduler {
    /// Persists a finalized invoice built by
    /// [`InvoiceBuilder::build`](crate::billing::InvoiceBuilder::build).
    pub async fn create_invoice(&self, new_invoice: NewInvoice) -> Result<Invoice> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_invoice(&new_invoice)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an invoice by its ID.
    pub async fn get_invoice(&self, params: &Id) -> Result<Option<Invoice>> {
        let db_path = self.db_path.clone();
        let invoice_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_invoice(invoice_id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all invoices in storage order.
    pub async fn list_invoices(&self) -> Result<Vec<Invoice>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_invoices()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
