//! Appointment model and the product snapshot embedded in it.

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AppointmentStatus, PaymentMethod, Product, TimeSlot};

/// The product details frozen into an appointment at booking time
/// (the "diseño").
///
/// Only the fields the client saw when selecting are kept. The optional
/// `product_id` links back to the catalog for convenience but carries no
/// integrity guarantee once the catalog entry is edited or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSnapshot {
    /// Catalog id of the product at selection time, if still known
    pub product_id: Option<u64>,

    /// Product title as shown when booking
    pub title: String,

    /// Product description as shown when booking
    pub description: Option<String>,

    /// Price agreed at booking time
    pub price: Decimal,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            product_id: Some(product.id),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
        }
    }
}

/// A booked service slot for a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique identifier for the appointment
    pub id: u64,

    /// Name of the client who booked
    pub client_name: String,

    /// Contact phone number (the only optional booking field)
    pub phone: Option<String>,

    /// Calendar date of the appointment, stored as text.
    ///
    /// Validated as a real date on every write, but kept as text so that a
    /// malformed legacy value can never make a read fail; date-range views
    /// parse per entry and skip what does not parse.
    pub date: String,

    /// One of the six fixed daily intervals
    pub slot: TimeSlot,

    /// How the client intends to pay
    pub payment_method: PaymentMethod,

    /// Lifecycle status, Pendiente unless explicitly set
    #[serde(default)]
    pub status: AppointmentStatus,

    /// Product snapshot captured at booking time
    pub design: ProductSnapshot,

    /// Display-only reference number shown for Transferencia bookings.
    ///
    /// Pseudo-random, regenerated by the booking form on every method
    /// switch. Not unique and never used as an identifier.
    pub payment_reference: Option<String>,

    /// Timestamp when the appointment was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the appointment was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Appointment {
    /// Parse the stored date text into a calendar date, if well formed.
    pub fn calendar_date(&self) -> Option<jiff::civil::Date> {
        self.date.parse().ok()
    }
}
