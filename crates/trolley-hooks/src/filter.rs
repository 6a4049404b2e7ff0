//! # Quantity-Input Filter (Extension Point A)
//!
//! The render-time hook. The host calls it with its default selector
//! arguments and a product reference, synchronously, before rendering the
//! quantity control markup; the returned mapping is what gets rendered.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product page render                                                    │
//! │                                                                         │
//! │  host defaults: { input_value: 1, step: 0.5, min: 0, max: - }          │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  filter_args(defaults, product) ← THIS HOOK                            │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  { input_value: 1, step: 1, min: 1, max: product cap }                 │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  <input type="number" step="1" min="1" max="5">                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use trolley_core::policy::whole_unit_input_args;
use trolley_core::types::QuantityInputArgs;

use crate::host::ProductView;

// =============================================================================
// Quantity Input Filter
// =============================================================================

/// The callback a host registers on its quantity-input extension point.
///
/// Stateless: all behavior is the core policy. It exists as a type so the
/// host loads and registers it alongside the corrector as one unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantityInputFilter;

impl QuantityInputFilter {
    /// Creates the filter.
    pub fn new() -> Self {
        QuantityInputFilter
    }

    /// Returns the host's arguments with whole units enforced.
    ///
    /// Pure function of its inputs; no error conditions. The result is
    /// well-formed even when the product defines no maximum (the `None`
    /// sentinel passes through as "no upper bound").
    pub fn filter_args(
        &self,
        defaults: QuantityInputArgs,
        product: &dyn ProductView,
    ) -> QuantityInputArgs {
        let args = whole_unit_input_args(defaults, product.max_purchase_quantity());
        debug!(
            product_id = %product.id(),
            step = args.step,
            min_value = args.min_value,
            max_value = ?args.max_value,
            "quantity input args filtered",
        );
        args
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
