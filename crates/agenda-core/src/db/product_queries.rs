//! Catalog product CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};
use rust_decimal::Decimal;

use crate::{
    error::{AgendaError, DatabaseResultExt, Result},
    models::{Product, ProductCategory, ProductKind},
};

const INSERT_PRODUCT_SQL: &str = "INSERT INTO products (title, description, category, kind, price, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_PRODUCT_SQL: &str = "SELECT id, title, description, category, kind, price, created_at, updated_at FROM products WHERE id = ?1";
const SELECT_ALL_PRODUCTS_SQL: &str = "SELECT id, title, description, category, kind, price, created_at, updated_at FROM products ORDER BY id";
const CHECK_PRODUCT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)";
const DELETE_PRODUCT_SQL: &str = "DELETE FROM products WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Product from a database row.
    fn build_product_from_row(row: &rusqlite::Row) -> rusqlite::Result<Product> {
        let category_str: String = row.get(3)?;
        let category = category_str.parse::<ProductCategory>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                Type::Text,
                format!("Invalid product category: {category_str}").into(),
            )
        })?;

        let kind_str: String = row.get(4)?;
        let kind = kind_str.parse::<ProductKind>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid product kind: {kind_str}").into(),
            )
        })?;

        Ok(Product {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            description: row.get(2)?,
            category,
            kind,
            price: row.get::<_, String>(5)?.parse::<Decimal>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new catalog product.
    pub fn create_product(
        &mut self,
        title: &str,
        description: Option<&str>,
        category: ProductCategory,
        kind: ProductKind,
        price: Decimal,
    ) -> Result<Product> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_PRODUCT_SQL,
            params![
                title,
                description,
                category.as_str(),
                kind.as_str(),
                price.to_string(),
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| AgendaError::database_error("Failed to insert product", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Product {
            id,
            title: title.into(),
            description: description.map(String::from),
            category,
            kind,
            price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a product by its ID.
    pub fn get_product(&self, id: u64) -> Result<Option<Product>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PRODUCT_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], Self::build_product_from_row)
            .optional()
            .map_err(|e| AgendaError::database_error("Failed to query product", e))
    }

    /// Lists the whole catalog in storage order.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PRODUCTS_SQL)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let products = stmt
            .query_map([], Self::build_product_from_row)
            .map_err(|e| AgendaError::database_error("Failed to query products", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AgendaError::database_error("Failed to fetch products", e))?;

        Ok(products)
    }

    /// Permanently deletes a product from the catalog.
    ///
    /// Appointments keep their snapshots; only the catalog entry goes away.
    pub fn delete_product(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PRODUCT_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| AgendaError::database_error("Failed to check product existence", e))?;

        if !exists {
            return Err(AgendaError::ProductNotFound { id });
        }

        tx.execute(DELETE_PRODUCT_SQL, params![id as i64])
            .map_err(|e| AgendaError::database_error("Failed to delete product", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
