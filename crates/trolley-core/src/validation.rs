//! # Validation Module
//!
//! Input checks for the surfaces that do reject values: the in-memory host
//! in trolley-hooks and the policy's own well-formedness tests.
//!
//! The extension points themselves never call these - they are total
//! functions that normalize bad input instead of rejecting it.
//!
//! ## Usage
//! ```rust
//! use trolley_core::types::Quantity;
//! use trolley_core::validation::validate_line_quantity;
//!
//! // Validate before storing a new cart line
//! validate_line_quantity(Quantity::from_value(2.0)).unwrap();
//! assert!(validate_line_quantity(Quantity::from_value(-1.0)).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{Quantity, QuantityInputArgs};

// =============================================================================
// Quantity Validators
// =============================================================================

/// Validates a quantity being written into a cart line.
///
/// ## Rules
/// - Must be finite
/// - Must be strictly positive (a zero-quantity line is a removal, which is
///   the host's operation, not ours)
///
/// Fractional values are accepted here: letting them into the double is
/// exactly what the corrector exists to exercise.
pub fn validate_line_quantity(qty: Quantity) -> ValidationResult<()> {
    if !qty.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "quantity".to_string(),
        });
    }

    if qty.value() <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
            value: qty.value(),
        });
    }

    Ok(())
}

// =============================================================================
// Input-Args Validators
// =============================================================================

/// Validates that selector arguments describe a renderable control.
///
/// ## Rules
/// - `step` must be finite and strictly positive
/// - `min_value` must be finite and non-negative
/// - `max_value`, when present, must be finite and at least `min_value`
pub fn validate_quantity_args(args: &QuantityInputArgs) -> ValidationResult<()> {
    if !args.step.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "step".to_string(),
        });
    }

    if args.step <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "step".to_string(),
            value: args.step,
        });
    }

    if !args.min_value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: "min_value".to_string(),
        });
    }

    if args.min_value < 0.0 {
        return Err(ValidationError::Negative {
            field: "min_value".to_string(),
            value: args.min_value,
        });
    }

    if let Some(max) = args.max_value {
        if !max.is_finite() {
            return Err(ValidationError::NotFinite {
                field: "max_value".to_string(),
            });
        }

        if max < args.min_value {
            return Err(ValidationError::EmptyRange {
                field: "max_value".to_string(),
                min: args.min_value,
                max,
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
