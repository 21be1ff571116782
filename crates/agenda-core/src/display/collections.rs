//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its collection with consistent structure and
//! graceful empty-collection handling.

use std::{fmt, ops::Index};

use crate::models::{Appointment, Invoice, Product};

/// Newtype wrapper for displaying collections of appointments.
pub struct Appointments(pub Vec<Appointment>);

impl Appointments {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of appointments in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the appointment at the given index.
    pub fn get(&self, index: usize) -> Option<&Appointment> {
        self.0.get(index)
    }

    /// Get an iterator over the appointments.
    pub fn iter(&self) -> std::slice::Iter<'_, Appointment> {
        self.0.iter()
    }
}

impl Index<usize> for Appointments {
    type Output = Appointment;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Appointments {
    type Item = Appointment;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Appointments {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Appointments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No appointments found.")
        } else {
            for appointment in &self.0 {
                write!(f, "{}", appointment)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying collections of invoices.
pub struct Invoices(pub Vec<Invoice>);

impl Invoices {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of invoices in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the invoices.
    pub fn iter(&self) -> std::slice::Iter<'_, Invoice> {
        self.0.iter()
    }
}

impl IntoIterator for Invoices {
    type Item = Invoice;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Invoices {
    type Item = &'a Invoice;
    type IntoIter = std::slice::Iter<'a, Invoice>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Invoices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No invoices found.")
        } else {
            for invoice in &self.0 {
                write!(f, "{}", invoice)?;
                writeln!(f)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the product catalog.
pub struct Products(pub Vec<Product>);

impl Products {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of products in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the products.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.0.iter()
    }
}

impl IntoIterator for Products {
    type Item = Product;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Products {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Products {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No products found.")
        } else {
            for product in &self.0 {
                write!(f, "{}", product)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{
        AppointmentStatus, PaymentMethod, ProductCategory, ProductKind, ProductSnapshot, TimeSlot,
    };

    fn create_test_appointment() -> Appointment {
        Appointment {
            id: 1,
            client_name: "Ana".to_string(),
            phone: Some("987654321".to_string()),
            date: "2024-06-01".to_string(),
            slot: TimeSlot::EarlyMorning,
            payment_method: PaymentMethod::Yape,
            status: AppointmentStatus::Pendiente,
            design: ProductSnapshot {
                product_id: Some(1),
                title: "Manicura Francesa".to_string(),
                description: None,
                price: Decimal::from(60),
            },
            payment_reference: None,
            created_at: Timestamp::from_second(1717200000).unwrap(),
            updated_at: Timestamp::from_second(1717200000).unwrap(),
        }
    }

    fn create_test_product() -> Product {
        Product {
            id: 1,
            title: "Manicura Francesa".to_string(),
            description: Some("Puntas blancas".to_string()),
            category: ProductCategory::Clasicas,
            kind: ProductKind::Manicure,
            price: Decimal::from(60),
            created_at: Timestamp::from_second(1717200000).unwrap(),
            updated_at: Timestamp::from_second(1717200000).unwrap(),
        }
    }

    #[test]
    fn test_appointments_display() {
        let appointments = Appointments(vec![create_test_appointment()]);
        let output = format!("{}", appointments);
        assert!(output.contains("# 1. Ana"));
        assert!(output.contains("○ Pendiente"));
        assert!(output.contains("8:15 a 10:00"));
        assert!(output.contains("Manicura Francesa"));

        let empty = Appointments(vec![]);
        assert_eq!(format!("{}", empty), "No appointments found.\n");
    }

    #[test]
    fn test_products_display() {
        let products = Products(vec![create_test_product()]);
        let output = format!("{}", products);
        assert!(output.contains("## Manicura Francesa (ID: 1)"));
        assert!(output.contains("Clásicas"));
        assert!(output.contains("S/ 60"));

        let empty = Products(vec![]);
        assert_eq!(format!("{}", empty), "No products found.\n");
    }

    #[test]
    fn test_invoices_display() {
        let invoice = Invoice {
            id: 1,
            client_name: "Ana".to_string(),
            dni: "12345678".to_string(),
            ruc: None,
            email: "ana@example.com".to_string(),
            payment_method: PaymentMethod::Plin,
            product_ids: vec![1, 2],
            total_price: Decimal::from(140),
            created_at: Timestamp::from_second(1717200000).unwrap(),
        };

        let invoices = Invoices(vec![invoice]);
        let output = format!("{}", invoices);
        assert!(output.contains("# Invoice 1"));
        assert!(output.contains("Total: S/ 140"));
        assert!(!output.contains("RUC"));

        let empty = Invoices(vec![]);
        assert_eq!(format!("{}", empty), "No invoices found.\n");
    }
}
