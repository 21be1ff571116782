//! Booking form controller.
//!
//! A [`BookingForm`] collects raw booking input, manages the display-only
//! transfer reference, and submits either a creation or an update depending
//! on whether it was opened for an existing appointment. Field validation
//! happens at submit time through the params layer.

use std::collections::HashSet;

use rand::Rng;

use crate::{
    models::{Appointment, PaymentMethod},
    params::{CreateAppointment, UpdateAppointment},
    scheduler::Scheduler,
    AgendaError, Result,
};

/// Collects booking input and drives appointment submission.
#[derive(Debug, Default)]
pub struct BookingForm {
    /// Set when the form was opened to edit an existing appointment.
    appointment_id: Option<u64>,
    pub client_name: String,
    pub phone: Option<String>,
    pub date: String,
    pub slot: String,
    pub status: Option<String>,
    pub product_id: Option<u64>,
    payment_method: Option<PaymentMethod>,
    payment_reference: Option<String>,
    used_references: HashSet<String>,
    submitting: bool,
}

impl BookingForm {
    /// Creates an empty form for booking a new appointment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form prefilled from an existing appointment.
    ///
    /// Submitting such a form updates the appointment instead of creating a
    /// new one.
    pub fn edit(appointment: &Appointment) -> Self {
        Self {
            appointment_id: Some(appointment.id),
            client_name: appointment.client_name.clone(),
            phone: appointment.phone.clone(),
            date: appointment.date.clone(),
            slot: appointment.slot.as_str().to_string(),
            status: Some(appointment.status.as_str().to_string()),
            product_id: appointment.design.product_id,
            payment_method: Some(appointment.payment_method),
            payment_reference: appointment.payment_reference.clone(),
            used_references: HashSet::new(),
            submitting: false,
        }
    }

    /// Selects the payment method.
    ///
    /// Every switch to Transferencia draws a fresh transfer reference, never
    /// repeating one already handed out by this form. Any other method
    /// clears the reference.
    pub fn set_payment_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
        self.payment_reference = match method {
            PaymentMethod::Transferencia => Some(self.draw_reference()),
            PaymentMethod::Yape | PaymentMethod::Plin => None,
        };
    }

    /// The currently selected payment method, if any.
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    /// The transfer reference to show the client, if one is active.
    ///
    /// Purely informational; it is stored with the appointment but never
    /// verified against an actual bank transfer.
    pub fn payment_reference(&self) -> Option<&str> {
        self.payment_reference.as_deref()
    }

    fn draw_reference(&mut self) -> String {
        let mut rng = rand::rng();
        loop {
            let candidate = rng.random_range(100_000_000u32..1_000_000_000).to_string();
            if self.used_references.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Submits the form, creating or updating the appointment.
    ///
    /// Returns `Ok(None)` when a submission is already in flight; the
    /// duplicate attempt is ignored. On failure the form state is left
    /// untouched so the input can be corrected and resubmitted.
    pub async fn submit(&mut self, scheduler: &Scheduler) -> Result<Option<Appointment>> {
        if self.submitting {
            return Ok(None);
        }

        let Some(payment_method) = self.payment_method else {
            return Err(AgendaError::invalid_input(
                "payment_method",
                "Payment method is required",
            ));
        };

        self.submitting = true;
        let result = match self.appointment_id {
            Some(id) => {
                scheduler
                    .update_appointment(&UpdateAppointment {
                        id,
                        client_name: Some(self.client_name.clone()),
                        phone: self.phone.clone(),
                        date: Some(self.date.clone()),
                        slot: Some(self.slot.clone()),
                        payment_method: Some(payment_method.as_str().to_string()),
                        status: self.status.clone(),
                        product_id: self.product_id,
                        payment_reference: self.payment_reference.clone(),
                    })
                    .await
            }
            None => {
                let Some(product_id) = self.product_id else {
                    self.submitting = false;
                    return Err(AgendaError::invalid_input(
                        "product_id",
                        "A catalog product must be selected",
                    ));
                };
                scheduler
                    .create_appointment(&CreateAppointment {
                        client_name: self.client_name.clone(),
                        phone: self.phone.clone(),
                        date: self.date.clone(),
                        slot: self.slot.clone(),
                        payment_method: payment_method.as_str().to_string(),
                        status: self.status.clone(),
                        product_id,
                        payment_reference: self.payment_reference.clone(),
                    })
                    .await
            }
        };
        self.submitting = false;

        result.map(Some)
    }
}
