//! Parameter structures for agenda operations
//!
//! Shared parameter structures usable from any interface (CLI today, other
//! front ends later) without framework-specific derives. Interface layers
//! wrap these with their own derives (clap, etc.) and convert via `From`.
//!
//! Raw user input arrives here as strings; each struct's `validate()` parses
//! the enumerated fields (slot, payment method, status, category) and the
//! calendar date, returning typed values or an
//! [`InvalidInput`](crate::AgendaError::InvalidInput) naming the offending
//! field.

use std::str::FromStr;

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    models::{AppointmentStatus, PaymentMethod, ProductCategory, ProductKind, TimeSlot},
    AgendaError, Result,
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for booking a new appointment.
///
/// Every field except `phone` is required. `status` defaults to Pendiente
/// when omitted. The referenced product is looked up and snapshotted at
/// creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAppointment {
    /// Name of the client (required)
    pub client_name: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Calendar date in `YYYY-MM-DD` form (required)
    pub date: String,
    /// One of the six fixed interval labels (required)
    pub slot: String,
    /// Payment method: Yape, Plin, or Transferencia (required)
    pub payment_method: String,
    /// Initial status; Pendiente when omitted
    pub status: Option<String>,
    /// Catalog id of the selected product (required)
    pub product_id: u64,
    /// Display-only transfer reference generated by the booking form
    pub payment_reference: Option<String>,
}

impl CreateAppointment {
    /// Validate the booking input and parse the enumerated fields.
    ///
    /// # Errors
    ///
    /// `AgendaError::InvalidInput` when a required field is empty, the date
    /// does not parse as a calendar date, or the slot / payment method /
    /// status value is not in its enumerated set.
    pub fn validate(&self) -> Result<(TimeSlot, PaymentMethod, AppointmentStatus)> {
        if self.client_name.trim().is_empty() {
            return Err(AgendaError::invalid_input(
                "client_name",
                "Client name is required",
            ));
        }

        if self.date.trim().is_empty() {
            return Err(AgendaError::invalid_input("date", "Date is required"));
        }
        self.date.parse::<Date>().map_err(|_| {
            AgendaError::invalid_input(
                "date",
                format!("'{}' is not a valid calendar date", self.date),
            )
        })?;

        let slot = TimeSlot::from_str(&self.slot)
            .map_err(|reason| AgendaError::invalid_input("slot", reason))?;

        let payment_method = PaymentMethod::from_str(&self.payment_method)
            .map_err(|reason| AgendaError::invalid_input("payment_method", reason))?;

        let status = match &self.status {
            Some(s) => AppointmentStatus::from_str(s)
                .map_err(|reason| AgendaError::invalid_input("status", reason))?,
            None => AppointmentStatus::default(),
        };

        Ok((slot, payment_method, status))
    }
}

/// Parameters for updating an existing appointment.
///
/// All fields besides `id` are optional; omitted fields keep their stored
/// values. The same enumerated-value validation as creation applies to
/// whatever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAppointment {
    /// Appointment ID to update (required)
    pub id: u64,
    /// Updated client name
    pub client_name: Option<String>,
    /// Updated phone number
    pub phone: Option<String>,
    /// Updated date in `YYYY-MM-DD` form
    pub date: Option<String>,
    /// Updated slot label
    pub slot: Option<String>,
    /// Updated payment method
    pub payment_method: Option<String>,
    /// Updated status (Pendiente, Cancelada, or Completado)
    pub status: Option<String>,
    /// Re-snapshot the design from this catalog product
    pub product_id: Option<u64>,
    /// Updated transfer reference (display-only)
    pub payment_reference: Option<String>,
}

impl UpdateAppointment {
    /// Validate and parse whichever optional fields are present.
    #[allow(clippy::type_complexity)]
    pub fn validate(
        &self,
    ) -> Result<(
        Option<TimeSlot>,
        Option<PaymentMethod>,
        Option<AppointmentStatus>,
        Option<String>,
    )> {
        let slot = self
            .slot
            .as_deref()
            .map(TimeSlot::from_str)
            .transpose()
            .map_err(|reason| AgendaError::invalid_input("slot", reason))?;

        let payment_method = self
            .payment_method
            .as_deref()
            .map(PaymentMethod::from_str)
            .transpose()
            .map_err(|reason| AgendaError::invalid_input("payment_method", reason))?;

        let status = self
            .status
            .as_deref()
            .map(AppointmentStatus::from_str)
            .transpose()
            .map_err(|reason| AgendaError::invalid_input("status", reason))?;

        if let Some(name) = &self.client_name {
            if name.trim().is_empty() {
                return Err(AgendaError::invalid_input(
                    "client_name",
                    "Client name cannot be empty",
                ));
            }
        }

        let date = match &self.date {
            Some(d) => {
                d.parse::<Date>().map_err(|_| {
                    AgendaError::invalid_input(
                        "date",
                        format!("'{d}' is not a valid calendar date"),
                    )
                })?;
                Some(d.clone())
            }
            None => None,
        };

        Ok((slot, payment_method, status, date))
    }
}

/// Parameters for deleting an appointment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteAppointment {
    /// The ID of the appointment to delete
    pub id: u64,
    /// Explicit confirmation to prevent accidental deletion
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing a single client's appointments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientAppointments {
    /// Client name to match
    pub client_name: String,
}

/// Inclusive date range used by the cached date filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateRange {
    /// Range start in `YYYY-MM-DD` form
    pub start: String,
    /// Range end in `YYYY-MM-DD` form
    pub end: String,
}

impl DateRange {
    /// Parse both bounds into calendar dates.
    pub fn parse(&self) -> Result<(Date, Date)> {
        let start = self.start.parse::<Date>().map_err(|_| {
            AgendaError::invalid_input(
                "start",
                format!("'{}' is not a valid calendar date", self.start),
            )
        })?;
        let end = self.end.parse::<Date>().map_err(|_| {
            AgendaError::invalid_input(
                "end",
                format!("'{}' is not a valid calendar date", self.end),
            )
        })?;
        Ok((start, end))
    }
}

/// Raw invoice submission input, consumed by the invoice builder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateInvoice {
    /// Name of the billed client (required)
    pub client_name: String,
    /// National identity document, exactly 8 characters
    pub dni: String,
    /// Tax registration number, empty or exactly 11 characters
    pub ruc: Option<String>,
    /// Billing email (required)
    pub email: String,
    /// Payment method: Yape, Plin, or Transferencia
    pub payment_method: String,
    /// Catalog ids of the selected products
    #[serde(default)]
    pub product_ids: Vec<u64>,
}

/// Parameters for adding a catalog product.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Product title (required)
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// Category: Bodas, Clásicas, or Spa
    pub category: String,
    /// Kind: Manicure or Manicure Spa
    pub kind: String,
    /// Non-negative price, e.g. `"60"` or `"75.50"`
    pub price: String,
}

impl CreateProduct {
    /// Validate the catalog input and parse the enumerated fields and price.
    pub fn validate(&self) -> Result<(ProductCategory, ProductKind, Decimal)> {
        if self.title.trim().is_empty() {
            return Err(AgendaError::invalid_input("title", "Title is required"));
        }

        let category = ProductCategory::from_str(&self.category)
            .map_err(|reason| AgendaError::invalid_input("category", reason))?;

        let kind = ProductKind::from_str(&self.kind)
            .map_err(|reason| AgendaError::invalid_input("kind", reason))?;

        let price = self.price.parse::<Decimal>().map_err(|_| {
            AgendaError::invalid_input("price", format!("'{}' is not a valid price", self.price))
        })?;
        if price.is_sign_negative() {
            return Err(AgendaError::invalid_input(
                "price",
                "Price cannot be negative",
            ));
        }

        Ok((category, kind, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> CreateAppointment {
        CreateAppointment {
            client_name: "Ana".to_string(),
            phone: Some("987654321".to_string()),
            date: "2024-06-01".to_string(),
            slot: "8:15 a 10:00".to_string(),
            payment_method: "Yape".to_string(),
            status: None,
            product_id: 1,
            payment_reference: None,
        }
    }

    #[test]
    fn create_appointment_defaults_to_pendiente() {
        let (slot, method, status) = booking().validate().expect("valid booking");
        assert_eq!(slot, TimeSlot::EarlyMorning);
        assert_eq!(method, PaymentMethod::Yape);
        assert_eq!(status, AppointmentStatus::Pendiente);
    }

    #[test]
    fn create_appointment_rejects_unknown_slot() {
        let mut params = booking();
        params.slot = "9:00 a 11:00".to_string();

        match params.validate().unwrap_err() {
            AgendaError::InvalidInput { field, .. } => assert_eq!(field, "slot"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn create_appointment_rejects_malformed_date() {
        let mut params = booking();
        params.date = "2024-13-45".to_string();

        match params.validate().unwrap_err() {
            AgendaError::InvalidInput { field, .. } => assert_eq!(field, "date"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn create_appointment_rejects_missing_name() {
        let mut params = booking();
        params.client_name = "  ".to_string();
        assert!(params.validate().is_err());
    }

    #[test]
    fn create_appointment_accepts_explicit_status() {
        let mut params = booking();
        params.status = Some("Completado".to_string());
        let (_, _, status) = params.validate().expect("valid booking");
        assert_eq!(status, AppointmentStatus::Completado);
    }

    #[test]
    fn update_appointment_parses_partial_fields() {
        let params = UpdateAppointment {
            id: 1,
            status: Some("Completado".to_string()),
            ..Default::default()
        };

        let (slot, method, status, date) = params.validate().expect("valid update");
        assert_eq!(slot, None);
        assert_eq!(method, None);
        assert_eq!(status, Some(AppointmentStatus::Completado));
        assert_eq!(date, None);
    }

    #[test]
    fn update_appointment_rejects_invalid_status() {
        let params = UpdateAppointment {
            id: 1,
            status: Some("Terminado".to_string()),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn date_range_parses_inclusive_bounds() {
        let range = DateRange {
            start: "2024-06-01".to_string(),
            end: "2024-06-30".to_string(),
        };
        let (start, end) = range.parse().expect("valid range");
        assert!(start < end);
    }

    #[test]
    fn create_product_rejects_negative_price() {
        let params = CreateProduct {
            title: "Manicura Francesa".to_string(),
            description: None,
            category: "Clásicas".to_string(),
            kind: "Manicure".to_string(),
            price: "-5".to_string(),
        };

        match params.validate().unwrap_err() {
            AgendaError::InvalidInput { field, .. } => assert_eq!(field, "price"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
