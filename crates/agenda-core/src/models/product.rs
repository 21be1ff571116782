//! Catalog product model and its enumerated attributes.

use std::str::FromStr;

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Occasion category a catalog product belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductCategory {
    #[serde(rename = "Bodas")]
    Bodas,
    #[serde(rename = "Clásicas")]
    Clasicas,
    #[serde(rename = "Spa")]
    Spa,
}

impl FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bodas" => Ok(ProductCategory::Bodas),
            "clásicas" | "clasicas" => Ok(ProductCategory::Clasicas),
            "spa" => Ok(ProductCategory::Spa),
            _ => Err(format!("Invalid product category: {s}")),
        }
    }
}

impl ProductCategory {
    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Bodas => "Bodas",
            ProductCategory::Clasicas => "Clásicas",
            ProductCategory::Spa => "Spa",
        }
    }
}

/// Service type of a catalog product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductKind {
    #[serde(rename = "Manicure")]
    Manicure,
    #[serde(rename = "Manicure Spa")]
    ManicureSpa,
}

impl FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manicure" => Ok(ProductKind::Manicure),
            "manicure spa" => Ok(ProductKind::ManicureSpa),
            _ => Err(format!("Invalid product kind: {s}")),
        }
    }
}

impl ProductKind {
    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::Manicure => "Manicure",
            ProductKind::ManicureSpa => "Manicure Spa",
        }
    }
}

/// A catalog service/design item with a fixed price.
///
/// Products are read-only from the scheduling core's perspective: once a
/// product is referenced by an appointment or invoice, the snapshot taken at
/// selection time is what persists. Later catalog edits never rewrite
/// history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub id: u64,

    /// Short display name
    pub title: String,

    /// Longer marketing description
    pub description: Option<String>,

    /// Occasion category (Bodas, Clásicas, Spa)
    pub category: ProductCategory,

    /// Service type (Manicure, Manicure Spa)
    pub kind: ProductKind,

    /// Non-negative price in soles
    pub price: Decimal,

    /// Timestamp when the product was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the product was last modified (UTC)
    pub updated_at: Timestamp,
}
