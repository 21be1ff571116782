//! Request types for updating models.

use super::{AppointmentStatus, PaymentMethod, ProductSnapshot, TimeSlot};

/// Validated partial update for an appointment.
///
/// Every field is optional; `None` leaves the stored value untouched. Built
/// from raw [`crate::params::UpdateAppointment`] input via `TryFrom`, which
/// is where the string fields are parsed against the enumerated sets.
#[derive(Debug, Default)]
pub struct UpdateAppointmentRequest {
    pub client_name: Option<String>,
    pub phone: Option<String>,
    pub date: Option<String>,
    pub slot: Option<TimeSlot>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<AppointmentStatus>,
    pub design: Option<ProductSnapshot>,
    pub payment_reference: Option<String>,
}

impl TryFrom<crate::params::UpdateAppointment> for UpdateAppointmentRequest {
    type Error = crate::AgendaError;

    fn try_from(params: crate::params::UpdateAppointment) -> Result<Self, Self::Error> {
        let (slot, payment_method, status, date) = params.validate()?;

        Ok(Self {
            client_name: params.client_name,
            phone: params.phone,
            date,
            slot,
            payment_method,
            status,
            design: None,
            payment_reference: params.payment_reference,
        })
    }
}
