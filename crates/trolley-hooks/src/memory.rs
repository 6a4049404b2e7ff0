//! # In-Memory Host
//!
//! Reference implementations of the host seams, shipped so downstream
//! tests (and embedders without a real host) can substitute them.
//!
//! ## Fidelity Notes
//! The double mirrors the host behaviors the hooks depend on:
//! - lines are keyed, and several lines may reference one product
//! - the update mechanism fails on a stale key
//! - update calls are counted, so tests can assert the corrector issues
//!   no redundant writes

use chrono::{DateTime, Utc};
use uuid::Uuid;

use trolley_core::types::Quantity;
use trolley_core::validation::validate_line_quantity;
use trolley_core::ValidationError;

use crate::error::HostError;
use crate::host::{CartHost, CartLine, ProductView};

// =============================================================================
// Catalog Product
// =============================================================================

/// A catalog entry exposing the one field the filter reads.
#[derive(Debug, Clone)]
pub struct CatalogProduct {
    id: String,
    name: String,
    max_purchase_quantity: Option<Quantity>,
}

impl CatalogProduct {
    /// A product with no purchase cap.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        CatalogProduct {
            id: id.into(),
            name: name.into(),
            max_purchase_quantity: None,
        }
    }

    /// Sets a purchase cap. Malformed caps are stored as-is: normalizing
    /// them is the policy's job, and tests need to feed it bad values.
    pub fn with_max_purchase(mut self, max: Quantity) -> Self {
        self.max_purchase_quantity = Some(max);
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ProductView for CatalogProduct {
    fn id(&self) -> &str {
        &self.id
    }

    fn max_purchase_quantity(&self) -> Option<Quantity> {
        self.max_purchase_quantity
    }
}

// =============================================================================
// In-Memory Cart
// =============================================================================

/// One stored line. `added_at` mirrors the host's line metadata; the hooks
/// never read it, but embedders listing the cart want it.
#[derive(Debug, Clone)]
struct MemoryLine {
    key: String,
    product_id: String,
    quantity: Quantity,
    added_at: DateTime<Utc>,
}

/// An owned cart implementing the host's update mechanism.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCart {
    lines: Vec<MemoryLine>,
    writes: usize,
}

impl InMemoryCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        InMemoryCart::default()
    }

    /// Adds a line and returns its minted key.
    ///
    /// ## Errors
    /// Rejects non-finite and non-positive quantities, as the real host's
    /// add-to-cart path does. Fractional quantities are accepted - they
    /// are what the corrector exists to find.
    pub fn add_line(
        &mut self,
        product_id: &str,
        quantity: Quantity,
    ) -> Result<String, ValidationError> {
        validate_line_quantity(quantity)?;

        let key = Uuid::new_v4().simple().to_string();
        self.lines.push(MemoryLine {
            key: key.clone(),
            product_id: product_id.to_string(),
            quantity,
            added_at: Utc::now(),
        });
        Ok(key)
    }

    /// Quantity currently stored under `key`.
    pub fn quantity_of(&self, key: &str) -> Option<Quantity> {
        self.lines.iter().find(|l| l.key == key).map(|l| l.quantity)
    }

    /// When the line under `key` was added.
    pub fn added_at(&self, key: &str) -> Option<DateTime<Utc>> {
        self.lines.iter().find(|l| l.key == key).map(|l| l.added_at)
    }

    /// Number of update calls the cart has accepted.
    ///
    /// Tests use this to assert the no-redundant-writes property: a run
    /// over an all-whole cart must leave it at zero.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl CartHost for InMemoryCart {
    fn lines(&self) -> Vec<CartLine> {
        self.lines
            .iter()
            .map(|l| CartLine::new(l.key.clone(), l.product_id.clone(), l.quantity))
            .collect()
    }

    fn set_line_quantity(&mut self, key: &str, quantity: Quantity) -> Result<(), HostError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.key == key)
            .ok_or_else(|| HostError::LineNotFound {
                key: key.to_string(),
            })?;

        line.quantity = quantity;
        self.writes += 1;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_line_mints_unique_keys() {
        let mut cart = InMemoryCart::new();
        let k1 = cart.add_line("p1", Quantity::from_value(1.0)).unwrap();
        let k2 = cart.add_line("p1", Quantity::from_value(2.0)).unwrap();

        assert_ne!(k1, k2);
        assert_eq!(cart.len(), 2);
        assert!(cart.added_at(&k1).is_some());
    }

    #[test]
    fn test_add_line_rejects_invalid_quantities() {
        let mut cart = InMemoryCart::new();
        assert!(cart.add_line("p1", Quantity::from_value(0.0)).is_err());
        assert!(cart.add_line("p1", Quantity::from_value(-1.0)).is_err());
        assert!(cart.add_line("p1", Quantity::from_value(f64::NAN)).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_line_quantity_counts_writes() {
        let mut cart = InMemoryCart::new();
        let key = cart.add_line("p1", Quantity::from_value(2.5)).unwrap();
        assert_eq!(cart.write_count(), 0);

        cart.set_line_quantity(&key, Quantity::from_value(3.0))
            .unwrap();
        assert_eq!(cart.write_count(), 1);
        assert_eq!(cart.quantity_of(&key), Some(Quantity::from_value(3.0)));
    }

    #[test]
    fn test_set_line_quantity_stale_key_fails() {
        let mut cart = InMemoryCart::new();
        let err = cart
            .set_line_quantity("missing", Quantity::from_value(1.0))
            .unwrap_err();
        assert!(matches!(err, HostError::LineNotFound { .. }));
    }
}
