//! Appointment operations for the Scheduler.

use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{AgendaError, Result},
    models::{Appointment, ProductSnapshot, UpdateAppointmentRequest},
    params::{ClientAppointments, CreateAppointment, Id, UpdateAppointment},
};

impl Scheduler {
    /// Books a new appointment.
    ///
    /// The referenced catalog product is looked up and copied into the
    /// appointment as a snapshot, so later catalog edits or deletions leave
    /// the booking unchanged. The status defaults to Pendiente when the
    /// params leave it unset.
    pub async fn create_appointment(&self, params: &CreateAppointment) -> Result<Appointment> {
        let (slot, payment_method, status) = params.validate()?;
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let product = db
                .get_product(params.product_id)?
                .ok_or(AgendaError::ProductNotFound {
                    id: params.product_id,
                })?;

            db.create_appointment(
                &params.client_name,
                params.phone.as_deref(),
                &params.date,
                slot,
                payment_method,
                status,
                ProductSnapshot::from(&product),
                params.payment_reference.as_deref(),
            )
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an appointment by its ID.
    pub async fn get_appointment(&self, params: &Id) -> Result<Option<Appointment>> {
        let db_path = self.db_path.clone();
        let appointment_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_appointment(appointment_id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all appointments in storage order.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_appointments()
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists the appointments booked under the given client name.
    pub async fn list_appointments_by_client(
        &self,
        params: &ClientAppointments,
    ) -> Result<Vec<Appointment>> {
        let db_path = self.db_path.clone();
        let client_name = params.client_name.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_appointments_by_client(&client_name)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Applies a partial update to an appointment.
    ///
    /// When the params carry a `product_id`, the design snapshot is re-taken
    /// from that catalog product. Omitted fields keep their stored values.
    pub async fn update_appointment(&self, params: &UpdateAppointment) -> Result<Appointment> {
        let appointment_id = params.id;
        let product_id = params.product_id;
        let mut request = UpdateAppointmentRequest::try_from(params.clone())?;
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;

            if let Some(product_id) = product_id {
                let product = db
                    .get_product(product_id)?
                    .ok_or(AgendaError::ProductNotFound { id: product_id })?;
                request.design = Some(ProductSnapshot::from(&product));
            }

            db.update_appointment(appointment_id, request)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes an appointment. This operation cannot be undone.
    pub async fn delete_appointment(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let appointment_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_appointment(appointment_id)
        })
        .await
        .map_err(|e| AgendaError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
