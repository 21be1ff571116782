//! Invoice model.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PaymentMethod;

/// A finalized aggregation of selected products and a client's billing info.
///
/// Invoices are frozen at creation: the core exposes no update or delete flow
/// for them. The total is established by the invoice builder before
/// submission and must equal the sum of the referenced product prices at that
/// moment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    /// Unique identifier for the invoice
    pub id: u64,

    /// Name of the billed client
    pub client_name: String,

    /// National identity document, exactly 8 characters
    pub dni: String,

    /// Tax registration number, absent or exactly 11 characters
    pub ruc: Option<String>,

    /// Billing email
    pub email: String,

    /// How the invoice was paid
    pub payment_method: PaymentMethod,

    /// Catalog ids of the billed products, in selection order
    pub product_ids: Vec<u64>,

    /// Sum of the selected product prices at creation time
    pub total_price: Decimal,

    /// Timestamp when the invoice was created (UTC)
    pub created_at: Timestamp,
}
