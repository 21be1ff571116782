//! Enumerated values for appointments: status, payment method, and time slot.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of appointment statuses.
///
/// There is deliberately no transition table: any status may be written at
/// any time, matching the permissive lifecycle of the booking flow. Completed
/// or cancelled appointments may be reopened to pending.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AppointmentStatus {
    /// Appointment is booked and waiting to happen
    #[default]
    #[serde(rename = "Pendiente")]
    Pendiente,

    /// Appointment was cancelled
    #[serde(rename = "Cancelada")]
    Cancelada,

    /// Service was performed
    #[serde(rename = "Completado")]
    Completado,
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendiente" => Ok(AppointmentStatus::Pendiente),
            "cancelada" => Ok(AppointmentStatus::Cancelada),
            "completado" => Ok(AppointmentStatus::Completado),
            _ => Err(format!("Invalid appointment status: {s}")),
        }
    }
}

impl AppointmentStatus {
    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pendiente => "Pendiente",
            AppointmentStatus::Cancelada => "Cancelada",
            AppointmentStatus::Completado => "Completado",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            AppointmentStatus::Completado => "✓ Completado",
            AppointmentStatus::Cancelada => "✗ Cancelada",
            AppointmentStatus::Pendiente => "○ Pendiente",
        }
    }
}

/// Type-safe enumeration of accepted payment methods.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    #[serde(rename = "Yape")]
    Yape,
    #[serde(rename = "Plin")]
    Plin,
    /// Bank transfer; the booking form shows a display-only reference number
    /// for this method.
    #[serde(rename = "Transferencia")]
    Transferencia,
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yape" => Ok(PaymentMethod::Yape),
            "plin" => Ok(PaymentMethod::Plin),
            "transferencia" => Ok(PaymentMethod::Transferencia),
            _ => Err(format!("Invalid payment method: {s}")),
        }
    }
}

impl PaymentMethod {
    /// Convert to the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Yape => "Yape",
            PaymentMethod::Plin => "Plin",
            PaymentMethod::Transferencia => "Transferencia",
        }
    }
}

/// One of the six fixed daily intervals an appointment can occupy.
///
/// The set is closed: a booking must name one of these exact intervals. The
/// string form (`"8:15 a 10:00"`) is both the display label and the stored
/// value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeSlot {
    #[serde(rename = "8:15 a 10:00")]
    EarlyMorning,
    #[serde(rename = "10:15 a 12:00")]
    LateMorning,
    #[serde(rename = "14:15 a 16:00")]
    EarlyAfternoon,
    #[serde(rename = "16:15 a 18:00")]
    LateAfternoon,
    #[serde(rename = "18:15 a 20:00")]
    EarlyEvening,
    #[serde(rename = "20:15 a 22:00")]
    LateEvening,
}

impl TimeSlot {
    /// All bookable slots, in chronological order.
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::EarlyMorning,
        TimeSlot::LateMorning,
        TimeSlot::EarlyAfternoon,
        TimeSlot::LateAfternoon,
        TimeSlot::EarlyEvening,
        TimeSlot::LateEvening,
    ];

    /// Convert to the stored/display interval label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::EarlyMorning => "8:15 a 10:00",
            TimeSlot::LateMorning => "10:15 a 12:00",
            TimeSlot::EarlyAfternoon => "14:15 a 16:00",
            TimeSlot::LateAfternoon => "16:15 a 18:00",
            TimeSlot::EarlyEvening => "18:15 a 20:00",
            TimeSlot::LateEvening => "20:15 a 22:00",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .iter()
            .find(|slot| slot.as_str() == s)
            .copied()
            .ok_or_else(|| format!("Invalid time slot: {s}"))
    }
}
