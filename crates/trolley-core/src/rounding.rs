//! # Rounding Module
//!
//! The swappable rounding policy applied to fractional quantities.
//!
//! ## Rounding Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HOW 2.5 UNITS BECOME A WHOLE NUMBER                                    │
//! │                                                                         │
//! │  HalfAwayFromZero (default, the host's own rounding function):         │
//! │    2.5 → 3      -2.5 → -3      2.4 → 2                                 │
//! │                                                                         │
//! │  Floor (never order more than was asked for):                          │
//! │    2.5 → 2      2.9 → 2                                                │
//! │                                                                         │
//! │  Ceiling (never order less than was asked for):                        │
//! │    2.1 → 3      2.5 → 3                                                │
//! │                                                                         │
//! │  The mode is per-extension configuration; switching it never affects   │
//! │  lines whose quantities are already whole.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// Rounding Mode
// =============================================================================

/// How a fractional quantity is rewritten to a whole number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to the nearest whole number; halves round away from zero.
    /// Matches the host platform's own rounding function.
    #[default]
    HalfAwayFromZero,

    /// Round down towards negative infinity.
    Floor,

    /// Round up towards positive infinity.
    Ceiling,
}

impl RoundingMode {
    /// Applies the mode to a raw value.
    ///
    /// ## Example
    /// ```rust
    /// use trolley_core::rounding::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::HalfAwayFromZero.apply(2.5), 3.0);
    /// assert_eq!(RoundingMode::Floor.apply(2.5), 2.0);
    /// assert_eq!(RoundingMode::Ceiling.apply(2.1), 3.0);
    /// ```
    #[inline]
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            // f64::round ties away from zero, which is exactly the host's rule
            RoundingMode::HalfAwayFromZero => value.round(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceiling => value.ceil(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
