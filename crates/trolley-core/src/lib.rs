//! # trolley-core: Pure Policy Logic for Trolley
//!
//! This crate is the **heart** of Trolley. It decides what a well-formed
//! quantity looks like, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Trolley Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Host Platform                               │   │
//! │  │   Quantity selector render ──► Cart totals calculation          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ extension points                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    trolley-hooks                                │   │
//! │  │    QuantityInputFilter, CartQuantityCorrector, host traits      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ trolley-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  rounding │  │  policy   │  │ validation│  │   │
//! │  │   │ Quantity  │  │ Rounding  │  │ input args│  │   rules   │  │   │
//! │  │   │ InputArgs │  │   Mode    │  │ correction│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO HOST CALLS • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Quantity newtype and the quantity-input arguments mapping
//! - [`rounding`] - Swappable rounding policy for fractional quantities
//! - [`policy`] - The whole-unit enforcement rules themselves
//! - [`error`] - Typed validation errors
//! - [`validation`] - Input checks used by host doubles and tests
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: The host platform is reached only through trolley-hooks
//! 3. **Total Functions**: Malformed host input is normalized, never an error
//! 4. **Explicit Errors**: Where validation exists, errors are typed, never strings
//!
//! ## Example Usage
//!
//! ```rust
//! use trolley_core::policy::whole_unit_input_args;
//! use trolley_core::types::{Quantity, QuantityInputArgs};
//!
//! // The host's default arguments allow fractional steps
//! let defaults = QuantityInputArgs {
//!     input_value: 1.0,
//!     step: 0.5,
//!     min_value: 0.0,
//!     max_value: None,
//! };
//!
//! // Enforce whole units, capped at the product's purchase maximum
//! let args = whole_unit_input_args(defaults, Some(Quantity::from_value(5.0)));
//! assert_eq!(args.step, 1.0);
//! assert_eq!(args.min_value, 1.0);
//! assert_eq!(args.max_value, Some(5.0));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod policy;
pub mod rounding;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use trolley_core::Quantity` instead of
// `use trolley_core::types::Quantity`

pub use error::ValidationError;
pub use rounding::RoundingMode;
pub use types::{Quantity, QuantityInputArgs};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The only increment the quantity selector may offer.
///
/// ## Business Reason
/// Products sold by unit cannot be ordered in fractions; a step of 1 makes
/// the rendered `<input type="number">` reject fractional entry up front.
pub const WHOLE_STEP: f64 = 1.0;

/// The smallest orderable quantity.
///
/// ## Business Reason
/// Zero or negative quantities are never a valid order line. The selector's
/// lower bound is pinned here, and product purchase caps below this value
/// are treated as "no cap" rather than producing an empty range.
pub const MIN_ORDERABLE: f64 = 1.0;
