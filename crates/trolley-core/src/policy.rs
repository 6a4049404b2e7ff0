//! # Whole-Unit Policy
//!
//! The enforcement rules behind both extension points, as pure functions.
//!
//! ## Where These Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Policy Call Sites                                   │
//! │                                                                         │
//! │  Render time (extension point A)                                        │
//! │    host defaults + product cap                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    whole_unit_input_args() ──► step=1, min=1, max=cap                  │
//! │                                                                         │
//! │  Totals time (extension point B)                                        │
//! │    each cart line quantity                                              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │    correction_for() ──► None (leave alone) | Some(snapped quantity)    │
//! │                                                                         │
//! │  Both are total functions: malformed host input is normalized,         │
//! │  never an error.                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::rounding::RoundingMode;
use crate::types::{Quantity, QuantityInputArgs};
use crate::{MIN_ORDERABLE, WHOLE_STEP};

// =============================================================================
// Input-Args Policy (extension point A)
// =============================================================================

/// Rewrites the host's default quantity-selector arguments to whole units.
///
/// ## Rules
/// - `step` is pinned to 1 (fractional increments rejected at render time)
/// - `min_value` is pinned to 1 (zero or negative quantities rejected)
/// - `max_value` becomes the product's purchase cap; a missing or malformed
///   cap means "no upper bound", never an error
/// - every other field passes through untouched
///
/// ## Example
/// ```rust
/// use trolley_core::policy::whole_unit_input_args;
/// use trolley_core::types::{Quantity, QuantityInputArgs};
///
/// let defaults = QuantityInputArgs {
///     input_value: 2.0,
///     step: 0.5,
///     min_value: 0.0,
///     max_value: None,
/// };
///
/// let args = whole_unit_input_args(defaults, Some(Quantity::from_value(10.0)));
/// assert_eq!(args.step, 1.0);
/// assert_eq!(args.min_value, 1.0);
/// assert_eq!(args.max_value, Some(10.0));
/// assert_eq!(args.input_value, 2.0); // untouched
/// ```
pub fn whole_unit_input_args(
    defaults: QuantityInputArgs,
    max_purchase: Option<Quantity>,
) -> QuantityInputArgs {
    QuantityInputArgs {
        step: WHOLE_STEP,
        min_value: MIN_ORDERABLE,
        max_value: sanitize_max_purchase(max_purchase).map(|q| q.value()),
        ..defaults
    }
}

/// Normalizes a product's purchase cap.
///
/// ## Rules
/// A cap that is absent, non-finite, or below the minimum orderable unit
/// would produce an empty or nonsensical range; all three mean "no cap".
pub fn sanitize_max_purchase(max: Option<Quantity>) -> Option<Quantity> {
    max.filter(|m| m.is_finite() && m.value() >= MIN_ORDERABLE)
}

// =============================================================================
// Correction Policy (extension point B)
// =============================================================================

/// Decides whether a cart line quantity needs rewriting before totals.
///
/// ## Returns
/// - `None` for a whole quantity: the line must NOT be rewritten. The
///   no-redundant-writes rule lives here, so callers can treat `Some` as
///   "issue exactly one host update".
/// - `Some(snapped)` for a fractional quantity.
///
/// Non-finite quantities also return `None`: they are host corruption this
/// component cannot meaningfully repair, and rewriting them would break the
/// run-twice-equals-run-once property.
///
/// ## Example
/// ```rust
/// use trolley_core::policy::correction_for;
/// use trolley_core::rounding::RoundingMode;
/// use trolley_core::types::Quantity;
///
/// let mode = RoundingMode::HalfAwayFromZero;
/// assert_eq!(correction_for(Quantity::from_value(4.0), mode), None);
/// assert_eq!(
///     correction_for(Quantity::from_value(2.5), mode),
///     Some(Quantity::from_value(3.0)),
/// );
/// ```
pub fn correction_for(quantity: Quantity, mode: RoundingMode) -> Option<Quantity> {
    if !quantity.is_finite() || quantity.is_whole() {
        return None;
    }

    Some(quantity.snap(mode))
}

// =============================================================================
// Unit Tests
// =============================================================================
