//! # Quantity Types
//!
//! The quantity newtype and the arguments mapping consumed by the host's
//! quantity selector.
//!
//! ## Why a Float Newtype?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FRACTIONAL QUANTITY PROBLEM                                        │
//! │                                                                         │
//! │  The host platform carries line quantities as floats so that           │
//! │  weight-sold goods (0.35 kg of cheese) work at all. For unit-sold      │
//! │  goods that same channel lets 2.5 "bottles" into the cart through      │
//! │  imports, API writes, or third-party extensions.                       │
//! │                                                                         │
//! │  Quantity wraps the host's representation instead of fighting it:      │
//! │    • is_whole()  - exact check, no epsilon                             │
//! │    • snap(mode)  - rewrite to a whole number under a rounding policy   │
//! │                                                                         │
//! │  Every quantity in this workspace flows through this type.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use trolley_core::rounding::RoundingMode;
//! use trolley_core::types::Quantity;
//!
//! let qty = Quantity::from_value(2.5);
//! assert!(!qty.is_whole());
//! assert_eq!(qty.snap(RoundingMode::HalfAwayFromZero).value(), 3.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rounding::RoundingMode;

// =============================================================================
// Quantity
// =============================================================================

/// A line-item quantity in the host's own representation.
///
/// ## Design Decisions
/// - **f64 (host-shaped)**: The host's quantity channel is float-valued;
///   wrapping it is what lets fractional values be detected at all
/// - **Single field tuple struct**: Zero-cost abstraction over f64
/// - **No Eq/Hash**: Floats do not support them; comparisons stay explicit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Quantity(f64);

impl Quantity {
    /// Creates a Quantity from the host's raw value.
    #[inline]
    pub const fn from_value(value: f64) -> Self {
        Quantity(value)
    }

    /// Returns the raw value the host understands.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks whether the quantity is a whole number of units.
    ///
    /// ## Exactness
    /// The check is exact (`fract() == 0`), not epsilon-based. Snapped
    /// values are exact integers, so a corrected quantity always tests
    /// whole on the next pass - that is what makes correction idempotent.
    ///
    /// Non-finite values are never whole.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::types::Quantity;
    ///
    /// assert!(Quantity::from_value(4.0).is_whole());
    /// assert!(!Quantity::from_value(2.5).is_whole());
    /// ```
    #[inline]
    pub fn is_whole(&self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Checks whether the value is finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Rewrites the quantity to a whole number under the given rounding mode.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::rounding::RoundingMode;
    /// use trolley_core::types::Quantity;
    ///
    /// let qty = Quantity::from_value(2.5);
    /// assert_eq!(qty.snap(RoundingMode::HalfAwayFromZero).value(), 3.0);
    /// assert_eq!(qty.snap(RoundingMode::Floor).value(), 2.0);
    /// assert_eq!(qty.snap(RoundingMode::Ceiling).value(), 3.0);
    /// ```
    #[inline]
    pub fn snap(&self, mode: RoundingMode) -> Self {
        Quantity(mode.apply(self.0))
    }
}

/// Display prints the host-facing value (`3`, not `3.0`, for whole numbers).
impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Quantity {
    #[inline]
    fn from(value: f64) -> Self {
        Quantity(value)
    }
}

// =============================================================================
// Quantity Input Arguments
// =============================================================================

/// Arguments for the host's rendered quantity selector.
///
/// ## Shape
/// This mirrors the mapping the host passes through its input-args
/// extension point and then feeds into
/// `<input type="number" step=... min=... max=...>`. Field names match the
/// host's keys, so the struct serde round-trips with the host boundary.
///
/// ## Fields
/// - `input_value`: the prefilled current quantity; passed through untouched
/// - `step`: increment the control accepts
/// - `min_value`: lower bound of the control
/// - `max_value`: upper bound; `None` is the host's "no limit" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantityInputArgs {
    /// Prefilled value shown in the control.
    pub input_value: f64,

    /// Numeric increment of the control.
    pub step: f64,

    /// Lower bound of the control.
    pub min_value: f64,

    /// Upper bound of the control; `None` means unbounded.
    pub max_value: Option<f64>,
}

impl Default for QuantityInputArgs {
    /// The host's typical defaults before any policy runs: one unit
    /// prefilled, unit step, no lower pin, no cap.
    fn default() -> Self {
        QuantityInputArgs {
            input_value: 1.0,
            step: 1.0,
            min_value: 0.0,
            max_value: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_whole() {
        assert!(Quantity::from_value(0.0).is_whole());
        assert!(Quantity::from_value(4.0).is_whole());
        assert!(Quantity::from_value(-3.0).is_whole());
        assert!(!Quantity::from_value(2.5).is_whole());
        assert!(!Quantity::from_value(-0.25).is_whole());
    }

    #[test]
    fn test_non_finite_is_not_whole() {
        assert!(!Quantity::from_value(f64::NAN).is_whole());
        assert!(!Quantity::from_value(f64::INFINITY).is_whole());
        assert!(!Quantity::from_value(f64::NEG_INFINITY).is_whole());
    }

    #[test]
    fn test_snap_produces_whole_values() {
        let qty = Quantity::from_value(2.5);
        assert!(qty.snap(RoundingMode::HalfAwayFromZero).is_whole());
        assert!(qty.snap(RoundingMode::Floor).is_whole());
        assert!(qty.snap(RoundingMode::Ceiling).is_whole());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Quantity::from_value(3.0)), "3");
        assert_eq!(format!("{}", Quantity::from_value(2.5)), "2.5");
    }

    #[test]
    fn test_default_input_args() {
        let args = QuantityInputArgs::default();
        assert_eq!(args.input_value, 1.0);
        assert_eq!(args.step, 1.0);
        assert_eq!(args.min_value, 0.0);
        assert_eq!(args.max_value, None);
    }
}
