//! Display formatting functions and result types.
//!
//! Domain models implement `Display` directly for markdown-formatted
//! terminal output; this module adds collection wrappers, operation result
//! wrappers, and date formatting so every interface renders the agenda the
//! same way.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Appointments, Invoices, Products)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Appointments, Invoices, Products};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
