//! Display implementations for domain models.
//!
//! Markdown-formatted output for rich terminal display, separated from the
//! model definitions to keep presentation out of the data layer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Appointment, AppointmentStatus, Invoice, PaymentMethod, Product, TimeSlot,
};

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.client_name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Date: {} ({})", self.date, self.slot)?;
        writeln!(f, "- Payment: {}", self.payment_method)?;
        if let Some(reference) = &self.payment_reference {
            writeln!(f, "- Transfer reference: {reference}")?;
        }
        if let Some(phone) = &self.phone {
            writeln!(f, "- Phone: {phone}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f)?;
        writeln!(f, "## Design")?;
        writeln!(f)?;
        writeln!(f, "- {} (S/ {})", self.design.title, self.design.price)?;
        if let Some(desc) = &self.design.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;

        writeln!(f, "- Category: {}", self.category.as_str())?;
        writeln!(f, "- Kind: {}", self.kind.as_str())?;
        writeln!(f, "- Price: S/ {}", self.price)?;
        if let Some(desc) = &self.description {
            writeln!(f, "- Description: {desc}")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Invoice {}", self.id)?;
        writeln!(f)?;

        writeln!(f, "- Client: {}", self.client_name)?;
        writeln!(f, "- DNI: {}", self.dni)?;
        if let Some(ruc) = &self.ruc {
            writeln!(f, "- RUC: {ruc}")?;
        }
        writeln!(f, "- Email: {}", self.email)?;
        writeln!(f, "- Payment: {}", self.payment_method)?;
        writeln!(f, "- Products: {}", self.product_ids.len())?;
        writeln!(f, "- Total: S/ {}", self.total_price)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        Ok(())
    }
}
