//! Client-side appointment cache with derived views.
//!
//! The cache holds the most recently fetched appointment list and answers
//! lookups and filters from it without touching the database. Refreshing
//! replaces the held list wholesale; a failed refresh leaves the previous
//! contents in place. When refreshes race, whichever completes last wins.

use jiff::civil::Date;

use super::Scheduler;
use crate::{error::Result, models::Appointment, params::ClientAppointments};

/// Snapshot of the appointment list, queryable without further I/O.
#[derive(Debug, Default)]
pub struct AppointmentCache {
    appointments: Vec<Appointment>,
}

impl AppointmentCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cache contents with the full appointment list.
    pub async fn refresh(&mut self, scheduler: &Scheduler) -> Result<()> {
        self.appointments = scheduler.list_appointments().await?;
        Ok(())
    }

    /// Replaces the cache contents with one client's appointments.
    pub async fn refresh_for_client(
        &mut self,
        scheduler: &Scheduler,
        params: &ClientAppointments,
    ) -> Result<()> {
        self.appointments = scheduler.list_appointments_by_client(params).await?;
        Ok(())
    }

    /// All cached appointments, in the order they were fetched.
    pub fn all(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Looks up a cached appointment by its ID.
    pub fn get(&self, id: u64) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Cached appointments booked under the given client name.
    pub fn by_client(&self, client_name: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.client_name == client_name)
            .collect()
    }

    /// Cached appointments whose date falls within the inclusive range.
    ///
    /// Entries whose stored date does not parse as a calendar date are
    /// excluded rather than treated as an error.
    pub fn by_date_range(&self, start: Date, end: Date) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| {
                a.calendar_date()
                    .map(|date| date >= start && date <= end)
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
