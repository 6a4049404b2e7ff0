//! # Cart Quantity Corrector (Extension Point B)
//!
//! The totals-time hook. The host calls it with the current cart
//! immediately before computing order totals; fractional line quantities
//! are rewritten through the host's update mechanism so no fraction
//! reaches price/tax calculation. The host re-reads cart state afterwards.
//!
//! ## Correction Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  before_totals(cart, ctx)                                               │
//! │       │                                                                 │
//! │       ├── plain admin page load? ──► return empty report, ZERO          │
//! │       │                              cart reads or writes               │
//! │       ▼                                                                 │
//! │  snapshot cart lines                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  per line: correction_for(quantity, mode)                               │
//! │       │                                                                 │
//! │       ├── None  ──► line untouched (NO redundant host update)           │
//! │       │                                                                 │
//! │       └── Some  ──► cart.set_line_quantity(key, snapped)?               │
//! │                     record (key, from, to) in the report                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ok(CorrectionReport) - silent from the shopper's perspective;          │
//! │  no notice is produced by design                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use trolley_core::policy::correction_for;
use trolley_core::rounding::RoundingMode;
use trolley_core::types::Quantity;

use crate::context::RequestContext;
use crate::error::HostError;
use crate::host::CartHost;

// =============================================================================
// Correction Report
// =============================================================================

/// One rewritten line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Correction {
    /// Key of the rewritten line.
    pub key: String,

    /// Quantity found in the cart.
    pub from: Quantity,

    /// Whole quantity written back.
    pub to: Quantity,
}

/// What the corrector did in one invocation.
///
/// Hosts are free to discard this; it exists so the operation is
/// observable (tests assert on it, callers may log it).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionReport {
    /// Every rewrite issued, in cart order.
    pub corrections: Vec<Correction>,
}

impl CorrectionReport {
    /// Whether the invocation left the cart untouched.
    pub fn is_empty(&self) -> bool {
        self.corrections.is_empty()
    }

    /// Number of lines rewritten.
    pub fn len(&self) -> usize {
        self.corrections.len()
    }
}

// =============================================================================
// Cart Quantity Corrector
// =============================================================================

/// The callback a host registers immediately before totals calculation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartQuantityCorrector {
    rounding: RoundingMode,
}

impl CartQuantityCorrector {
    /// Creates a corrector with the given rounding mode.
    pub fn new(rounding: RoundingMode) -> Self {
        CartQuantityCorrector { rounding }
    }

    /// The configured rounding mode.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Rounds every fractional line quantity in `cart` to a whole number.
    ///
    /// ## Guard
    /// During a plain administrative page load the cart must not be
    /// mutated as a side effect of unrelated admin actions: the corrector
    /// returns an empty report without touching the cart at all.
    /// Asynchronous administrative requests (order-edit screens
    /// recalculating line items) run the correction normally.
    ///
    /// ## Idempotence
    /// Whole quantities are never rewritten, so a second run over the same
    /// cart issues zero host updates and returns an empty report.
    ///
    /// ## Errors
    /// A failure from the host's update mechanism propagates untouched;
    /// lines already rewritten stay rewritten (the host owns recovery).
    pub fn before_totals(
        &self,
        cart: &mut dyn CartHost,
        ctx: &RequestContext,
    ) -> Result<CorrectionReport, HostError> {
        if ctx.suppresses_cart_correction() {
            debug!("administrative page load, cart left untouched");
            return Ok(CorrectionReport::default());
        }

        let mut corrections = Vec::new();
        for line in cart.lines() {
            if let Some(snapped) = correction_for(line.quantity, self.rounding) {
                cart.set_line_quantity(&line.key, snapped)?;
                debug!(
                    key = %line.key,
                    product_id = %line.product_id,
                    from = %line.quantity,
                    to = %snapped,
                    "rounded fractional quantity",
                );
                corrections.push(Correction {
                    key: line.key,
                    from: line.quantity,
                    to: snapped,
                });
            }
        }

        if !corrections.is_empty() {
            debug!(count = corrections.len(), "cart corrected before totals");
        }

        Ok(CorrectionReport { corrections })
    }
}

/// Convenience for one-off use with the default rounding mode.
pub fn correct_before_totals(
    cart: &mut dyn CartHost,
    ctx: &RequestContext,
) -> Result<CorrectionReport, HostError> {
    CartQuantityCorrector::default().before_totals(cart, ctx)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryCart;

    fn cart_with(quantities: &[f64]) -> InMemoryCart {
        let mut cart = InMemoryCart::new();
        for (i, q) in quantities.iter().enumerate() {
            cart.add_line(&format!("p{}", i), Quantity::from_value(*q))
                .unwrap();
        }
        cart
    }

    #[test]
    fn test_fractional_quantities_become_whole() {
        let mut cart = cart_with(&[2.5, 1.0, 0.25]);
        let report = correct_before_totals(&mut cart, &RequestContext::storefront()).unwrap();

        assert_eq!(report.len(), 2);
        for line in cart.lines() {
            assert!(line.quantity.is_whole(), "line {} not whole", line.key);
        }
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        let mut cart = cart_with(&[2.5]);
        let report = correct_before_totals(&mut cart, &RequestContext::storefront()).unwrap();

        assert_eq!(report.corrections[0].to, Quantity::from_value(3.0));
    }

    #[test]
    fn test_whole_quantities_are_not_rewritten() {
        let mut cart = cart_with(&[4.0, 1.0]);
        let report = correct_before_totals(&mut cart, &RequestContext::storefront()).unwrap();

        assert!(report.is_empty());
        assert_eq!(cart.write_count(), 0);
    }

    #[test]
    fn test_correction_is_idempotent() {
        let mut cart = cart_with(&[2.5, 3.2]);
        correct_before_totals(&mut cart, &RequestContext::storefront()).unwrap();
        let lines_after_first: Vec<_> = cart.lines();
        let writes_after_first = cart.write_count();

        let second = correct_before_totals(&mut cart, &RequestContext::storefront()).unwrap();
        assert!(second.is_empty());
        assert_eq!(cart.lines(), lines_after_first);
        assert_eq!(cart.write_count(), writes_after_first);
    }

    #[test]
    fn test_rounding_mode_is_swappable() {
        let mut cart = cart_with(&[2.5]);
        let corrector = CartQuantityCorrector::new(RoundingMode::Floor);
        let report = corrector
            .before_totals(&mut cart, &RequestContext::storefront())
            .unwrap();

        assert_eq!(report.corrections[0].to, Quantity::from_value(2.0));
    }

    #[test]
    fn test_admin_page_load_is_a_no_op() {
        let mut cart = cart_with(&[2.5]);
        let report = correct_before_totals(&mut cart, &RequestContext::admin_screen()).unwrap();

        assert!(report.is_empty());
        assert_eq!(cart.write_count(), 0);
        assert_eq!(cart.lines()[0].quantity, Quantity::from_value(2.5));
    }

    #[test]
    fn test_admin_background_request_corrects() {
        let mut cart = cart_with(&[2.5]);
        let report =
            correct_before_totals(&mut cart, &RequestContext::admin_background()).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(cart.lines()[0].quantity, Quantity::from_value(3.0));
    }
}
