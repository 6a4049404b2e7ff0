//! Shared fixtures for the hook integration tests.

use trolley_core::types::Quantity;
use trolley_hooks::memory::{CatalogProduct, InMemoryCart};

/// Initializes test logging once; respects `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A cart holding one line per quantity, keyed in insertion order.
pub fn cart_with_quantities(quantities: &[f64]) -> (InMemoryCart, Vec<String>) {
    let mut cart = InMemoryCart::new();
    let keys = quantities
        .iter()
        .enumerate()
        .map(|(i, q)| {
            cart.add_line(&format!("product-{}", i), Quantity::from_value(*q))
                .expect("fixture quantity must be storable")
        })
        .collect();
    (cart, keys)
}

/// A unit-sold product with a purchase cap.
pub fn capped_product(cap: f64) -> CatalogProduct {
    CatalogProduct::new("lemonade-330", "Bottled Lemonade 330ml")
        .with_max_purchase(Quantity::from_value(cap))
}

/// A unit-sold product without a purchase cap.
pub fn uncapped_product() -> CatalogProduct {
    CatalogProduct::new("lemonade-330", "Bottled Lemonade 330ml")
}
