//! Data models for appointments, invoices, and catalog products.
//!
//! This module contains the core domain models of the agenda system. Display
//! implementations for these models live in [`crate::display::models`] to
//! keep data structures separate from presentation logic.

pub mod appointment;
pub mod invoice;
pub mod product;
pub mod requests;
pub mod status;

#[cfg(test)]
mod tests;

// Re-export all public types at the models level
pub use appointment::{Appointment, ProductSnapshot};
pub use invoice::Invoice;
pub use product::{Product, ProductCategory, ProductKind};
pub use requests::UpdateAppointmentRequest;
pub use status::{AppointmentStatus, PaymentMethod, TimeSlot};
