//! Core library for the Agenda appointment scheduling application.
//!
//! This crate provides the business logic for a small personal-care studio:
//! booking and managing appointments, maintaining a product catalog, and
//! assembling invoices. It includes database operations, data models, and
//! error handling.
//!
//! # Display Architecture
//!
//! Domain models ([`models`]) implement [`std::fmt::Display`] for direct
//! markdown formatting, and display wrappers ([`display`]) provide
//! contextual formatting for collections and operation results. The same
//! data can be formatted differently depending on context while staying
//! consistent across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use agenda_core::{SchedulerBuilder, params::{CreateAppointment, CreateProduct}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("agenda.db"))
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
//!
//! let appointment = scheduler
//!     .create_appointment(&CreateAppointment {
//!         client_name: "Ana".to_string(),
//!         phone: None,
//!         date: "2024-06-01".to_string(),
//!         slot: "8:15 a 10:00".to_string(),
//!         payment_method: "Yape".to_string(),
//!         status: None,
//!         product_id: product.id,
//!         payment_reference: None,
//!     })
//!     .await?;
//! println!("Booked: {}", appointment);
//! # Ok(())
//! # }
//! ```

pub mod billing;
pub mod booking;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;

// Re-export commonly used types
pub use billing::{InvoiceBuilder, NewInvoice};
pub use booking::BookingForm;
pub use db::Database;
pub use display::{
    Appointments, CreateResult, DeleteResult, Invoices, LocalDateTime, OperationStatus, Products,
    UpdateResult,
};
pub use error::{AgendaError, Result};
pub use models::{
    Appointment, AppointmentStatus, Invoice, PaymentMethod, Product, ProductCategory, ProductKind,
    ProductSnapshot, TimeSlot, UpdateAppointmentRequest,
};
pub use params::{
    ClientAppointments, CreateAppointment, CreateInvoice, CreateProduct, DateRange,
    DeleteAppointment, Id, UpdateAppointment,
};
pub use scheduler::{AppointmentCache, Scheduler, SchedulerBuilder};
