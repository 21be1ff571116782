//! Invoice assembly.
//!
//! An [`InvoiceBuilder`] holds a snapshot of the product catalog and a
//! running selection of product ids. The total is never accumulated
//! incrementally; it is recomputed from the selection every time it is
//! asked for, so adds and removes can never drift the figure.

use rust_decimal::Decimal;

use crate::{
    models::{PaymentMethod, Product},
    params::CreateInvoice,
    AgendaError, Result,
};

/// A validated invoice ready for persistence.
///
/// Produced by [`InvoiceBuilder::build`]; the total is frozen at build time.
#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub client_name: String,
    pub dni: String,
    pub ruc: Option<String>,
    pub email: String,
    pub payment_method: PaymentMethod,
    pub product_ids: Vec<u64>,
    pub total_price: Decimal,
}

/// Accumulates a product selection against a catalog snapshot.
#[derive(Debug, Clone)]
pub struct InvoiceBuilder {
    catalog: Vec<Product>,
    selection: Vec<u64>,
}

impl InvoiceBuilder {
    /// Starts an empty selection over the given catalog snapshot.
    pub fn new(catalog: Vec<Product>) -> Self {
        Self {
            catalog,
            selection: Vec::new(),
        }
    }

    /// Adds a product to the selection.
    ///
    /// Ids not present in the catalog are ignored. The same product may be
    /// selected more than once; each occurrence counts toward the total.
    pub fn add_product(&mut self, product_id: u64) {
        if self.catalog.iter().any(|p| p.id == product_id) {
            self.selection.push(product_id);
        }
    }

    /// Removes one occurrence of a product from the selection.
    ///
    /// A no-op when the id is not currently selected.
    pub fn remove_product(&mut self, product_id: u64) {
        if let Some(pos) = self.selection.iter().position(|&id| id == product_id) {
            self.selection.remove(pos);
        }
    }

    /// The current selection, in insertion order.
    pub fn selection(&self) -> &[u64] {
        &self.selection
    }

    /// Computes the total from the current selection.
    pub fn total(&self) -> Decimal {
        self.selection
            .iter()
            .filter_map(|id| self.catalog.iter().find(|p| p.id == *id))
            .map(|p| p.price)
            .sum()
    }

    /// Validates the billing details and finalizes the invoice.
    ///
    /// # Errors
    ///
    /// `AgendaError::InvalidInput` when the client name or email is empty,
    /// the DNI is not exactly 8 characters, a present RUC is not exactly 11
    /// characters, or the payment method is not in its enumerated set.
    pub fn build(&self, params: &CreateInvoice) -> Result<NewInvoice> {
        if params.client_name.trim().is_empty() {
            return Err(AgendaError::invalid_input(
                "client_name",
                "Client name is required",
            ));
        }

        if params.dni.chars().count() != 8 {
            return Err(AgendaError::invalid_input(
                "dni",
                "DNI must be exactly 8 characters",
            ));
        }

        let ruc = match params.ruc.as_deref() {
            None | Some("") => None,
            Some(ruc) if ruc.chars().count() == 11 => Some(ruc.to_string()),
            Some(_) => {
                return Err(AgendaError::invalid_input(
                    "ruc",
                    "RUC must be empty or exactly 11 characters",
                ));
            }
        };

        if params.email.trim().is_empty() {
            return Err(AgendaError::invalid_input("email", "Email is required"));
        }

        let payment_method = params
            .payment_method
            .parse::<PaymentMethod>()
            .map_err(|reason| AgendaError::invalid_input("payment_method", reason))?;

        Ok(NewInvoice {
            client_name: params.client_name.clone(),
            dni: params.dni.clone(),
            ruc,
            email: params.email.clone(),
            payment_method,
            product_ids: self.selection.clone(),
            total_price: self.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::{ProductCategory, ProductKind};

    fn product(id: u64, title: &str, price: i64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: None,
            category: ProductCategory::Clasicas,
            kind: ProductKind::Manicure,
            price: Decimal::from(price),
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Manicura Francesa", 60),
            product(2, "Diseño Floral", 80),
        ]
    }

    fn billing_params() -> CreateInvoice {
        CreateInvoice {
            client_name: "Ana".to_string(),
            dni: "12345678".to_string(),
            ruc: None,
            email: "ana@example.com".to_string(),
            payment_method: "Yape".to_string(),
            product_ids: Vec::new(),
        }
    }

    #[test]
    fn total_follows_selection() {
        let mut builder = InvoiceBuilder::new(catalog());
        assert_eq!(builder.total(), Decimal::ZERO);

        builder.add_product(1);
        builder.add_product(2);
        assert_eq!(builder.total(), Decimal::from(140));

        builder.remove_product(1);
        assert_eq!(builder.total(), Decimal::from(80));
    }

    #[test]
    fn add_ignores_unknown_product() {
        let mut builder = InvoiceBuilder::new(catalog());
        builder.add_product(99);
        assert!(builder.selection().is_empty());
        assert_eq!(builder.total(), Decimal::ZERO);
    }

    #[test]
    fn remove_is_noop_when_absent() {
        let mut builder = InvoiceBuilder::new(catalog());
        builder.add_product(1);
        builder.remove_product(2);
        assert_eq!(builder.selection(), &[1]);
        assert_eq!(builder.total(), Decimal::from(60));
    }

    #[test]
    fn remove_drops_one_occurrence() {
        let mut builder = InvoiceBuilder::new(catalog());
        builder.add_product(1);
        builder.add_product(1);
        assert_eq!(builder.total(), Decimal::from(120));

        builder.remove_product(1);
        assert_eq!(builder.selection(), &[1]);
        assert_eq!(builder.total(), Decimal::from(60));
    }

    #[test]
    fn total_never_drifts_under_churn() {
        let mut builder = InvoiceBuilder::new(catalog());
        for _ in 0..50 {
            builder.add_product(1);
            builder.add_product(2);
            builder.remove_product(1);
            builder.remove_product(2);
        }
        assert_eq!(builder.total(), Decimal::ZERO);

        builder.add_product(2);
        assert_eq!(builder.total(), Decimal::from(80));
    }

    #[test]
    fn build_freezes_selection_and_total() {
        let mut builder = InvoiceBuilder::new(catalog());
        builder.add_product(1);
        builder.add_product(2);

        let invoice = builder.build(&billing_params()).expect("valid invoice");
        assert_eq!(invoice.product_ids, vec![1, 2]);
        assert_eq!(invoice.total_price, Decimal::from(140));
        assert_eq!(invoice.payment_method, PaymentMethod::Yape);
    }

    #[test]
    fn build_rejects_short_dni() {
        let builder = InvoiceBuilder::new(catalog());
        let mut params = billing_params();
        params.dni = "1234".to_string();

        match builder.build(&params).unwrap_err() {
            AgendaError::InvalidInput { field, .. } => assert_eq!(field, "dni"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn build_accepts_empty_ruc() {
        let builder = InvoiceBuilder::new(catalog());
        let mut params = billing_params();
        params.ruc = Some(String::new());

        let invoice = builder.build(&params).expect("valid invoice");
        assert_eq!(invoice.ruc, None);
    }

    #[test]
    fn build_rejects_wrong_length_ruc() {
        let builder = InvoiceBuilder::new(catalog());
        let mut params = billing_params();
        params.ruc = Some("123".to_string());

        match builder.build(&params).unwrap_err() {
            AgendaError::InvalidInput { field, .. } => assert_eq!(field, "ruc"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn build_rejects_missing_email() {
        let builder = InvoiceBuilder::new(catalog());
        let mut params = billing_params();
        params.email = " ".to_string();
        assert!(builder.build(&params).is_err());
    }

    #[test]
    fn build_rejects_unknown_payment_method() {
        let builder = InvoiceBuilder::new(catalog());
        let mut params = billing_params();
        params.payment_method = "Efectivo".to_string();

        match builder.build(&params).unwrap_err() {
            AgendaError::InvalidInput { field, .. } => assert_eq!(field, "payment_method"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}
