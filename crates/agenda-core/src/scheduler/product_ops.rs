//! Catalog operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{AgendaError, Result},
    models::Product,
    params::{CreateProduct, Id},
};

impl Scheduler {
    /// Adds a new product to the catalog.
    pub async fn create_product(&self, params: &CreateProduct) -> Result<Product> {
        let (category, kind, price) = params.validate()?;
        let db_path = self.db_path.clone();
        let title = params.title.clone();
        let description = params.description.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_product(&title, description.as_deref(), category, kind, price)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a product by its ID.
    pub async fn get_product(&self, params: &Id) -> Result<Option<Product>> {
        let db_path = self.db_path.clone();
        let product_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_product(product_id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the whole catalog in storage order.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_products()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a product from the catalog.
    ///
    /// Existing appointments keep their design snapshots.
    pub async fn delete_product(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let product_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_product(product_id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
