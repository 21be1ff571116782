//! Appointment CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};
use rust_decimal::Decimal;

use crate::{
    error::{AgendaError, DatabaseResultExt, Result},
    models::{
        Appointment, AppointmentStatus, PaymentMethod, ProductSnapshot, TimeSlot,
        UpdateAppointmentRequest,
    },
};

const APPOINTMENT_COLUMNS: &str = "id, client_name, phone, date, slot, payment_method, status, product_id, product_title, product_description, product_price, payment_reference, created_at, updated_at";
const INSERT_APPOINTMENT_SQL: &str = "INSERT INTO appointments (client_name, phone, date, slot, payment_method, status, product_id, product_title, product_description, product_price, payment_reference, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)";
const UPDATE_APPOINTMENT_SQL: &str = "UPDATE appointments SET client_name = ?1, phone = ?2, date = ?3, slot = ?4, payment_method = ?5, status = ?6, product_id = ?7, product_title = ?8, product_description = ?9, product_price = ?10, payment_reference = ?11, updated_at = ?12 WHERE id = ?13";
const CHECK_APPOINTMENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM appointments WHERE id = ?1)";
const DELETE_APPOINTMENT_SQL: &str = "DELETE FROM appointments WHERE id = ?1";

impl super::Database {
    /// Helper function to construct an Appointment from a database row.
    fn build_appointment_from_row(row: &rusqlite::Row) -> rusqlite::Result<Appointment> {
        let slot_str: String = row.get(4)?;
        let slot = slot_str.parse::<TimeSlot>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                4,
                Type::Text,
                format!("Invalid time slot: {slot_str}").into(),
            )
        })?;

        let method_str: String = row.get(5)?;
        let payment_method = method_str.parse::<PaymentMethod>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                5,
                Type::Text,
                format!("Invalid payment method: {method_str}").into(),
            )
        })?;

        let status_str: String = row.get(6)?;
        let status = status_str.parse::<AppointmentStatus>().map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                6,
                Type::Text,
                format!("Invalid appointment status: {status_str}").into(),
            )
        })?;

        let design = ProductSnapshot {
            product_id: row.get::<_, Option<i64>>(7)?.map(|id| id as u64),
            title: row.get(8)?,
            description: row.get(9)?,
            price: row.get::<_, String>(10)?.parse::<Decimal>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(10, Type::Text, Box::new(e))
            })?,
        };

        Ok(Appointment {
            id: row.get::<_, i64>(0)? as u64,
            client_name: row.get(1)?,
            phone: row.get(2)?,
            date: row.get(3)?,
            slot,
            payment_method,
            status,
            design,
            payment_reference: row.get(11)?,
            created_at: row.get::<_, String>(12)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(13)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(13, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Creates a new appointment with a product snapshot taken from the
    /// given design.
    ///
    /// Nothing prevents two appointments from sharing the same date and
    /// slot; the store is as permissive as the booking flow it backs.
    #[allow(clippy::too_many_arguments)]
    pub fn create_appointment(
        &mut self,
        client_name: &str,
        phone: Option<&str>,
        date: &str,
        slot: TimeSlot,
        payment_method: PaymentMethod,
        status: AppointmentStatus,
        design: ProductSnapshot,
        payment_reference: Option<&str>,
    ) -> Result<Appointment> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_APPOINTMENT_SQL,
            params![
                client_name,
                phone,
                date,
                slot.as_str(),
                payment_method.as_str(),
                status.as_str(),
                design.product_id.map(|id| id as i64),
                &design.title,
                design.description.as_deref(),
                design.price.to_string(),
                payment_reference,
                &now_str,
                &now_str
            ],
        )
        .map_err(|e| AgendaError::database_error("Failed to insert appointment", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Appointment {
            id,
            client_name: client_name.into(),
            phone: phone.map(String::from),
            date: date.into(),
            slot,
            payment_method,
            status,
            design,
            payment_reference: payment_reference.map(String::from),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves an appointment by its ID.
    pub fn get_appointment(&self, id: u64) -> Result<Option<Appointment>> {
        let query = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id as i64], Self::build_appointment_from_row)
            .optional()
            .map_err(|e| AgendaError::database_error("Failed to query appointment", e))
    }

    /// Lists all appointments in storage order.
    pub fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let query = format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY id");
        self.query_appointments(&query, [])
    }

    /// Lists the appointments booked under the given client name.
    pub fn list_appointments_by_client(&self, client_name: &str) -> Result<Vec<Appointment>> {
        let query = format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE client_name = ?1 ORDER BY id"
        );
        self.query_appointments(&query, params![client_name])
    }

    fn query_appointments<P: rusqlite::Params>(
        &self,
        query: &str,
        params: P,
    ) -> Result<Vec<Appointment>> {
        let mut stmt = self
            .connection
            .prepare(query)
            .map_err(|e| AgendaError::database_error("Failed to prepare query", e))?;

        let appointments = stmt
            .query_map(params, Self::build_appointment_from_row)
            .map_err(|e| AgendaError::database_error("Failed to query appointments", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| AgendaError::database_error("Failed to fetch appointments", e))?;

        Ok(appointments)
    }

    /// Applies a partial update to an appointment.
    ///
    /// Reads the current record, overlays whatever fields the request
    /// carries, and writes the merged row back. Fields the request leaves as
    /// `None` are untouched, except the transfer reference: it only exists
    /// while the merged payment method is Transferencia.
    pub fn update_appointment(
        &mut self,
        id: u64,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment> {
        let current = self
            .get_appointment(id)?
            .ok_or(AgendaError::AppointmentNotFound { id })?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        let payment_method = request.payment_method.unwrap_or(current.payment_method);
        let payment_reference = if payment_method == PaymentMethod::Transferencia {
            request.payment_reference.or(current.payment_reference)
        } else {
            None
        };

        let merged = Appointment {
            id,
            client_name: request.client_name.unwrap_or(current.client_name),
            phone: request.phone.or(current.phone),
            date: request.date.unwrap_or(current.date),
            slot: request.slot.unwrap_or(current.slot),
            payment_method,
            status: request.status.unwrap_or(current.status),
            design: request.design.unwrap_or(current.design),
            payment_reference,
            created_at: current.created_at,
            updated_at: now,
        };

        tx.execute(
            UPDATE_APPOINTMENT_SQL,
            params![
                &merged.client_name,
                merged.phone.as_deref(),
                &merged.date,
                merged.slot.as_str(),
                merged.payment_method.as_str(),
                merged.status.as_str(),
                merged.design.product_id.map(|pid| pid as i64),
                &merged.design.title,
                merged.design.description.as_deref(),
                merged.design.price.to_string(),
                merged.payment_reference.as_deref(),
                &now_str,
                id as i64
            ],
        )
        .map_err(|e| AgendaError::database_error("Failed to update appointment", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(merged)
    }

    /// Permanently deletes an appointment.
    pub fn delete_appointment(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_APPOINTMENT_EXISTS_SQL, params![id as i64], |row| {
                row.get(0)
            })
            .map_err(|e| AgendaError::database_error("Failed to check appointment existence", e))?;

        if !exists {
            return Err(AgendaError::AppointmentNotFound { id });
        }

        tx.execute(DELETE_APPOINTMENT_SQL, params![id as i64])
            .map_err(|e| AgendaError::database_error("Failed to delete appointment", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
